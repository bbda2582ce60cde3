//! Macros for building terms, predicates and substitutions in Rust code

/// Construct a substitution
#[macro_export]
macro_rules! substitution {
    () => { $crate::core::substitution::Substitution::empty() };

    ($($var:ident : $val:expr),* $(,)?) => {{
        let subs = $crate::core::substitution::Substitution::empty();
        $(
            let subs = subs.extend(
                $crate::core::term::Term::new(stringify!($var)),
                $crate::core::term::Term::from($val),
            );
        )*
        subs
    }}
}

/// Construct a predicate: `predicate!(Parent(x, Bob))` or `predicate!(~Sick(x))`.
#[macro_export]
macro_rules! predicate {
    (~ $name:ident ( $($arg:tt),* $(,)? )) => {
        {
            let args: Vec<&str> = vec![$(stringify!($arg)),*];
            $crate::core::predicate::Predicate::negated(stringify!($name), args)
        }
    };

    ($name:ident ( $($arg:tt),* $(,)? )) => {
        {
            let args: Vec<&str> = vec![$(stringify!($arg)),*];
            $crate::core::predicate::Predicate::new(stringify!($name), args)
        }
    };
}

