pub mod assessment;
pub mod category;
pub mod intake;
pub mod locale;
pub mod outreach;
pub mod research;

pub use category::{Category, CategoryError};
pub use locale::Language;
pub use intake::{VendorCsvImporter, VendorImportError, VendorRecord};
pub use outreach::{FollowUpEmail, OutreachError};
