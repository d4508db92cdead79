pub mod region;
pub mod user;

pub use region::Region;
pub use user::UserRecord;
