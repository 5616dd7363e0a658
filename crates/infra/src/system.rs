use chrono::{DateTime, Utc};

/// Clock abstraction so usecases can stamp `created` / `updated`
/// without reaching for the wall clock directly.
pub trait ISys: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct RealSys {}

impl ISys for RealSys {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
