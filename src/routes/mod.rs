/// Router Module Index
///
/// Splits the application's routes by who may reach them. Access control is not
/// applied here: the route guard in `lib.rs` wraps the whole router and decides
/// per path prefix, so these modules only declare what exists.

/// Routes open to every visitor, with or without a session.
pub mod public;

/// Routes under `/employer`. The guard requires a token and the `employer` role.
pub mod employer;

/// Routes under `/jobseeker`. The guard requires a token and the `jobseeker` role.
pub mod jobseeker;
