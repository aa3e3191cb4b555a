//! Admin service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tracing::info;

use crate::domain::{
    admin::{errors::AdminError, form::SiteForm},
    sites::{
        SitesService,
        records::{SiteId, SiteRecord},
    },
};

/// Whether the operator confirmed a destructive action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    #[default]
    Unconfirmed,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Unconfirmed
        }
    }
}

/// Validated create, edit and delete over the site catalog.
#[derive(Clone)]
pub struct AdminService {
    sites: Arc<dyn SitesService>,
}

impl Debug for AdminService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AdminService").finish_non_exhaustive()
    }
}

impl AdminService {
    #[must_use]
    pub fn new(sites: Arc<dyn SitesService>) -> Self {
        Self { sites }
    }

    /// Every site, unfiltered, for the management table.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be read.
    pub async fn list_sites(&self) -> Result<Vec<SiteRecord>, AdminError> {
        Ok(self.sites.list_sites().await?)
    }

    /// A form pre-filled from the stored site.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NotFound`] for an unknown site.
    pub async fn edit_form(&self, site: SiteId) -> Result<SiteForm, AdminError> {
        let record = self.sites.get_site(site).await?;

        Ok(SiteForm::from(&record))
    }

    /// Validate the form and add the site to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] without touching the catalog when any
    /// field is invalid.
    pub async fn create_site(&self, form: &SiteForm) -> Result<SiteRecord, AdminError> {
        let site = form.validate()?;
        let created = self.sites.create_site(site).await?;

        info!(site_id = %created.id, "admin created site");

        Ok(created)
    }

    /// Validate the form and replace every field of the stored site.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Validation`] for an invalid form and
    /// [`AdminError::NotFound`] for an unknown site.
    pub async fn update_site(
        &self,
        site: SiteId,
        form: &SiteForm,
    ) -> Result<SiteRecord, AdminError> {
        let update = form.validate()?;
        let updated = self.sites.update_site(site, update.into()).await?;

        info!(site_id = %site, "admin updated site");

        Ok(updated)
    }

    /// Delete a site once the operator has confirmed.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::ConfirmationRequired`] without deleting anything
    /// when unconfirmed and [`AdminError::NotFound`] for an unknown site.
    pub async fn delete_site(
        &self,
        site: SiteId,
        confirmation: Confirmation,
    ) -> Result<(), AdminError> {
        if confirmation != Confirmation::Confirmed {
            return Err(AdminError::ConfirmationRequired);
        }

        self.sites.delete_site(site).await?;

        info!(site_id = %site, "admin deleted site");

        Ok(())
    }
}
