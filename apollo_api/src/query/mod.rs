mod common;
pub use self::common::Query;

mod company;
pub use self::company::CompanySearchQuery;

mod people;
pub use self::people::PeopleSearchQuery;
