//! Re-render suppression.

use yew::Component;

/// Decides whether a mounted component recomputes its view for new props.
///
/// Yew calls [`Component::changed`] when a parent re-renders a component that
/// is already mounted; implementors forward that call here so the rule stays
/// a plain function of the two prop sets.
pub trait ShouldUpdate: Component {
    fn should_update(prev: &Self::Properties, next: &Self::Properties) -> bool;
}
