//! The operator table shared by the parser and the evaluator.
//!
//! Adding an operator means adding one entry to [`OPERATORS`] together with
//! its evaluation function. Names are matched against whole words by the
//! tokenizer, so they must stay pure `A-Z` and must not collide with
//! `TRUE`/`FALSE`.

use derive_more::Display;
use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Associativity {
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

#[derive(Clone, Copy)]
pub enum OperatorFn {
    Unary(fn(bool) -> bool),
    Binary(fn(bool, bool) -> bool),
}

pub struct OperatorSpec {
    pub name: &'static str,
    // higher binds tighter
    pub precedence: u8,
    pub associativity: Associativity,
    pub function: OperatorFn,
}

impl OperatorSpec {
    pub fn arity(&self) -> usize {
        match self.function {
            OperatorFn::Unary(_) => 1,
            OperatorFn::Binary(_) => 2,
        }
    }

    pub fn is_binary(&self) -> bool {
        self.arity() == 2
    }

    /// Minimum precedence for the right-hand side of a binary operator.
    pub fn rhs_precedence(&self) -> u8 {
        match self.associativity {
            Associativity::Left => self.precedence + 1,
            Associativity::Right => self.precedence,
        }
    }

    pub fn apply_unary(&self, a: bool) -> Option<bool> {
        match self.function {
            OperatorFn::Unary(f) => Some(f(a)),
            OperatorFn::Binary(_) => None,
        }
    }

    pub fn apply_binary(&self, a: bool, b: bool) -> Option<bool> {
        match self.function {
            OperatorFn::Binary(f) => Some(f(a, b)),
            OperatorFn::Unary(_) => None,
        }
    }
}

impl std::fmt::Debug for OperatorSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorSpec")
            .field("name", &self.name)
            .field("arity", &self.arity())
            .field("precedence", &self.precedence)
            .field("associativity", &self.associativity)
            .finish()
    }
}

pub static OPERATORS: phf::Map<&'static str, OperatorSpec> = phf_map! {
    "NOT" => OperatorSpec {
        name: "NOT",
        precedence: 5,
        associativity: Associativity::Right,
        function: OperatorFn::Unary(not),
    },
    "AND" => OperatorSpec {
        name: "AND",
        precedence: 4,
        associativity: Associativity::Left,
        function: OperatorFn::Binary(and),
    },
    "OR" => OperatorSpec {
        name: "OR",
        precedence: 3,
        associativity: Associativity::Left,
        function: OperatorFn::Binary(or),
    },
    "XOR" => OperatorSpec {
        name: "XOR",
        precedence: 3,
        associativity: Associativity::Left,
        function: OperatorFn::Binary(xor),
    },
    "IMP" => OperatorSpec {
        name: "IMP",
        precedence: 2,
        associativity: Associativity::Right,
        function: OperatorFn::Binary(imp),
    },
    "IFF" => OperatorSpec {
        name: "IFF",
        precedence: 1,
        associativity: Associativity::Left,
        function: OperatorFn::Binary(iff),
    },
};

fn not(a: bool) -> bool {
    !a
}

fn and(a: bool, b: bool) -> bool {
    a && b
}

fn or(a: bool, b: bool) -> bool {
    a || b
}

fn xor(a: bool, b: bool) -> bool {
    a != b
}

fn imp(a: bool, b: bool) -> bool {
    !a || b
}

fn iff(a: bool, b: bool) -> bool {
    a == b
}

pub fn lookup(name: &str) -> Option<&'static OperatorSpec> {
    OPERATORS.get(name)
}

/// Operator names, tightest binding first, ties broken alphabetically.
pub fn names() -> Vec<&'static str> {
    let mut specs: Vec<&OperatorSpec> = OPERATORS.values().collect();
    specs.sort_by(|a, b| b.precedence.cmp(&a.precedence).then(a.name.cmp(b.name)));
    specs.into_iter().map(|spec| spec.name).collect()
}
