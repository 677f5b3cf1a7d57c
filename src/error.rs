/*
    Arithmetic failures
*/

use std::fmt;

/// The operation that produced an [`ArithmeticError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Neg,
}

impl Operation {
    /// Returns the operator symbol, e.g. `+` for [`Operation::Add`].
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Rem => "%",
            Operation::Neg => "unary -",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Failure classes of the non-wrapping arithmetic capabilities.
///
/// The non-wrapping operations never return this value: they trap with its
/// display text instead. It is only returned by the checked reductions
/// (see [`try_sum_of`](crate::try_sum_of)).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The mathematical result does not fit the type.
    #[error("arithmetic overflow: `{op}` on `{ty}`")]
    Overflow { op: Operation, ty: &'static str },
    /// The right-hand operand of a division or remainder was zero.
    #[error("division by zero: `{op}` on `{ty}`")]
    DivisionByZero { op: Operation, ty: &'static str },
}

impl ArithmeticError {
    /// Builds an overflow error for `op` on the type `T`.
    pub fn overflow<T: ?Sized>(op: Operation) -> Self {
        ArithmeticError::Overflow {
            op,
            ty: std::any::type_name::<T>(),
        }
    }

    /// Builds a division by zero error for `op` on the type `T`.
    pub fn division_by_zero<T: ?Sized>(op: Operation) -> Self {
        ArithmeticError::DivisionByZero {
            op,
            ty: std::any::type_name::<T>(),
        }
    }

    /// Returns the operation that failed.
    pub fn operation(&self) -> Operation {
        match self {
            ArithmeticError::Overflow { op, .. } => *op,
            ArithmeticError::DivisionByZero { op, .. } => *op,
        }
    }
}

// Aborts the current computation.
// Every non-wrapping conformance funnels its failures through here.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn trap(err: ArithmeticError) -> ! {
    tracing::error!(error = %err, "arithmetic trap");
    panic!("{}", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = ArithmeticError::overflow::<i8>(Operation::Add);
        assert_eq!(err.to_string(), "arithmetic overflow: `+` on `i8`");

        let err = ArithmeticError::division_by_zero::<u32>(Operation::Rem);
        assert_eq!(err.to_string(), "division by zero: `%` on `u32`");
        assert_eq!(err.operation(), Operation::Rem);
    }

    #[test]
    #[should_panic(expected = "arithmetic overflow: `*` on `u16`")]
    fn trap_panics_with_message() {
        trap(ArithmeticError::overflow::<u16>(Operation::Mul));
    }
}
