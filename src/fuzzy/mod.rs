pub mod module;
pub mod rule;
pub mod set;
pub mod variable;

pub use module::{FuzzyModule, VarHandle};
pub use rule::{fairly, very, Rule, TermRef};
pub use set::{Hedge, MembershipShape};
pub use variable::Variable;
