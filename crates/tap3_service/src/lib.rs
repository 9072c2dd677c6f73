pub mod rap_file;
pub mod settings;
pub mod validator;

use std::sync::Arc;

use sqlx::PgPool;

use tap3_core::codec::RapEncoder;
use tap3_db::PgRapCatalog;

pub use rap_file::{RapFile, RapFileError, RapFileRecord};
pub use settings::{FtpSettings, Settings};
pub use validator::TapValidator;

/// One service instance per configured catalogue: the connection pool, the
/// immutable runtime settings and the RAP encoder seam.
pub struct RapService {
    catalog: PgRapCatalog,
    settings: Settings,
    encoder: Arc<dyn RapEncoder + Send + Sync>,
}

impl RapService {
    pub fn new(
        pool: PgPool,
        settings: Settings,
        encoder: Arc<dyn RapEncoder + Send + Sync>,
    ) -> Self {
        Self {
            catalog: PgRapCatalog::new(pool),
            settings,
            encoder,
        }
    }

    pub fn validator(&self) -> TapValidator<'_> {
        TapValidator::new(&self.catalog, &self.settings, self.encoder.as_ref())
    }
}
