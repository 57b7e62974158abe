//! Macros for ergonomic configuration.

/// Build an [`FsmConfig`](crate::core::FsmConfig) from a literal table.
///
/// The result is not validated; hand it to [`Fsm::new`](crate::Fsm::new)
/// to check it.
///
/// # Example
///
/// ```
/// use retrace::{fsm_config, Fsm};
///
/// let config = fsm_config! {
///     initial: "green",
///     states: {
///         "green" => { "timer" => "yellow" },
///         "yellow" => { "timer" => "red" },
///         "red" => { "timer" => "green", "fault" => "off" },
///         "off" => {},
///     }
/// };
///
/// let mut fsm = Fsm::new(config).unwrap();
/// fsm.trigger("timer").unwrap();
/// assert_eq!(fsm.state(), "yellow");
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let mut states = $crate::core::TransitionTable::new();
        $(
            #[allow(unused_mut)]
            let mut transitions = $crate::core::Transitions::new();
            $(
                transitions.insert(
                    $crate::core::EventId::from($event),
                    $crate::core::StateId::from($target),
                );
            )*
            states.insert($state, transitions);
        )*
        $crate::core::FsmConfig::new($initial, states)
    }};
}
