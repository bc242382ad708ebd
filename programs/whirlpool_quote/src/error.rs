use anchor_lang::prelude::*;

#[error_code]
pub enum MathError {
    #[msg("Arithmetic overflow detected")]
    Overflow,

    #[msg("Division by zero attempted")]
    DivideByZero,

    #[msg("Tick index outside valid range [-443636, 443636]")]
    TickOutOfBounds,

    #[msg("Sqrt price outside valid range [4295048016, 79226673515401279992447579055]")]
    SqrtPriceOutOfBounds,

    #[msg("Invalid tick range: lower >= upper")]
    InvalidTickRange,

    #[msg("Invalid sqrt price range: lower >= upper")]
    InvalidSqrtPriceRange,

    #[msg("Tick spacing must be positive")]
    InvalidTickSpacing,

    #[msg("Tick array start index outside valid range")]
    TickArrayOutOfBounds,

    #[msg("Percentage numerator and denominator must fit in u64 and be well formed")]
    InvalidPercentage,

    #[msg("Input token mint does not match either pool token mint")]
    TokenMintMismatch,

    #[msg("Price must be a non-negative finite value")]
    InvalidPrice,

    #[msg("Token amount does not fit in u64")]
    TokenAmountExceedsLimit,

    #[msg("Account discriminator does not match the expected account type")]
    AccountDiscriminatorMismatch,

    #[msg("Account data could not be deserialized")]
    AccountDidNotDeserialize,
}
