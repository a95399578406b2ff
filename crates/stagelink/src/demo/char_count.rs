use stagelink_process::{Computation, ComputationError, Context};

/// Appends the character count to the payload: `"hello"` becomes `"hello:5"`.
///
/// Counts Unicode scalar values, not bytes.
pub struct CharCount;

impl Computation for CharCount {
    type In = String;
    type Out = String;

    fn execute(&self, input: &String, _ctx: &Context<'_>) -> Result<String, ComputationError> {
        Ok(format!("{}:{}", input, input.chars().count()))
    }
}
