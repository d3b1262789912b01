//! Form input: raw user-facing fields into a validated [`TripRequest`](crate::TripRequest).

pub mod fields;
pub mod rules;
pub mod session;

pub use fields::FormFields;
pub use rules::{sanitize, split_list, FieldRules};
pub use session::{FormSession, MemberField};
