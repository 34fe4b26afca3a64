use std::f64::consts;

use crate::interpreter::evaluator::{
    core::Variables,
    function::core::{Function, Functions},
};

/// Defines the reference function table from a list of entries.
///
/// Each entry provides:
/// - a name (an operator symbol or a function name),
/// - an arity,
/// - a plain function pointer implementing it.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table the [`functions`] constructor walks),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  fn(&[f64]) -> f64,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every entry in the reference function table.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "+"     => { arity: 2, func: |args| args[0] + args[1] },
    "-"     => { arity: 2, func: |args| args[0] - args[1] },
    "*"     => { arity: 2, func: |args| args[0] * args[1] },
    "/"     => { arity: 2, func: |args| args[0] / args[1] },
    "%"     => { arity: 2, func: |args| args[0] % args[1] },
    "^"     => { arity: 2, func: |args| args[0].powf(args[1]) },
    "floor" => { arity: 1, func: |args| args[0].floor() },
    "ceil"  => { arity: 1, func: |args| args[0].ceil() },
    "trunc" => { arity: 1, func: |args| args[0].trunc() },
    "round" => { arity: 1, func: |args| args[0].round() },
    "sin"   => { arity: 1, func: |args| args[0].sin() },
    "cos"   => { arity: 1, func: |args| args[0].cos() },
    "tan"   => { arity: 1, func: |args| args[0].tan() },
    "asin"  => { arity: 1, func: |args| args[0].asin() },
    "acos"  => { arity: 1, func: |args| args[0].acos() },
    "atan"  => { arity: 1, func: |args| args[0].atan() },
    "atan2" => { arity: 2, func: |args| args[0].atan2(args[1]) },
    "sqrt"  => { arity: 1, func: |args| args[0].sqrt() },
    "exp"   => { arity: 1, func: |args| args[0].exp() },
    "log"   => { arity: 1, func: |args| args[0].ln() },
    "log10" => { arity: 1, func: |args| args[0].log10() },
    "abs"   => { arity: 1, func: |args| args[0].abs() },
}

/// Builds the reference function table.
///
/// IEEE semantics are kept as they are: `1 / 0` is infinity and `sqrt(-1)`
/// is NaN, neither is reported as a failure.
///
/// # Example
/// ```
/// use calcflow::interpreter::evaluator::function::builtin;
///
/// let functions = builtin::functions();
/// let atan2 = functions.get("atan2").unwrap();
///
/// assert_eq!(atan2.arity, 2);
/// let angle = atan2.call(&[1.0, 1.0]).unwrap();
/// assert!((angle - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// ```
#[must_use]
pub fn functions() -> Functions {
    BUILTIN_TABLE.iter()
                 .map(|def| {
                     let func = def.func;
                     (def.name, Function::infallible(def.arity, func))
                 })
                 .collect()
}

/// Builds the default variable environment with the constants `pi` and `e`.
#[must_use]
pub fn variables() -> Variables {
    Variables::from([("pi".to_string(), consts::PI), ("e".to_string(), consts::E)])
}
