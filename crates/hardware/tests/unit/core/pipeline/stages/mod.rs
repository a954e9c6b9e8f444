
/// Operand routing and ALU dispatch.
pub mod execute;
