//! Macros for ergonomic state machine construction.

/// Build a `StateMachine<String, String>` from a literal transition table.
///
/// Expands to a [`MachineBuilder`](crate::builder::MachineBuilder) chain and
/// evaluates to `Result<StateMachine, MachineError>`.
///
/// # Example
///
/// ```
/// use rewind::machine;
///
/// let mut door = machine! {
///     initial: "closed",
///     states: {
///         "closed" => { "open" => "opened", "lock" => "locked" },
///         "opened" => { "close" => "closed" },
///         "locked" => { "unlock" => "closed" },
///     }
/// }
/// .unwrap();
///
/// door.trigger("open").unwrap();
/// assert_eq!(door.state(), "opened");
/// ```
#[macro_export]
macro_rules! machine {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $to:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::builder::MachineBuilder::<::std::string::String, ::std::string::String>::new()
            .initial($initial)
            $(
                .state($state, |s| s $(.on($event, $to))*)
            )*
            .build()
    };
}
