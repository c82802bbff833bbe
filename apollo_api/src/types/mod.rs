mod organization;
pub use self::organization::{Organization, OrganizationID};

mod person;
pub use self::person::{Person, PersonID};

mod bulk_match;
pub use self::bulk_match::{BulkMatchRequest, EmailMatch, MatchDetail};

mod filters;
pub use self::filters::{Seniority, TALENT_ACQUISITION_TITLES};
