//! Connection entry point for the Voxview automation interface
//!
//! [`Client`] owns nothing but the channel: every handle it returns carries a
//! cheap clone of the service stub, and the remote objects those handles name
//! live entirely inside the host process.

use std::time::Duration;

use tonic::transport::{Channel, ClientTlsConfig, Endpoint};
use tracing::{info, instrument};
use voxview_proto::v1::{self as proto, voxview_service_client::VoxviewServiceClient};

use crate::browser::BrowserController;
use crate::error::{Error, Result, check_found};
use crate::viewer::ViewerController;
use crate::vr::VrController;

/// Service stub shared by every handle.
pub(crate) type Service = VoxviewServiceClient<Channel>;

/// Connection to a running Voxview host
#[derive(Debug, Clone)]
pub struct Client {
    service: Service,
}

/// Configuration for establishing the connection
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Enable TLS using the system's native roots
    pub tls: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            tls: false,
        }
    }
}

impl Client {
    /// Connect to a Voxview host with default configuration
    ///
    /// # Arguments
    ///
    /// * `addr` - The host address (e.g., `http://127.0.0.1:50051`)
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub async fn connect(addr: impl AsRef<str>) -> Result<Self> {
        Self::connect_with_config(addr, ClientConfig::default()).await
    }

    /// Connect to a Voxview host with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the address is malformed or the connection fails.
    pub async fn connect_with_config(
        addr: impl AsRef<str>,
        config: ClientConfig,
    ) -> Result<Self> {
        let mut endpoint = Endpoint::from_shared(addr.as_ref().to_string())
            .map_err(|e| Error::invalid_argument(format!("invalid endpoint: {e}")))?
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout);

        if config.tls {
            endpoint = endpoint.tls_config(ClientTlsConfig::new().with_native_roots())?;
        }

        let channel = endpoint.connect().await?;

        info!(addr = %addr.as_ref(), "connected to Voxview host");

        Ok(Self {
            service: VoxviewServiceClient::new(channel),
        })
    }

    /// The database browser window currently open in the host
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the host has no browser window open.
    #[instrument(skip(self))]
    pub async fn current_browser(&self) -> Result<BrowserController> {
        let response = self
            .service
            .clone()
            .current_browser(proto::Empty {})
            .await?
            .into_inner();
        check_found(response.status, "browser window")?;
        let browser = response
            .browser
            .ok_or_else(|| Error::missing_field("browser handle"))?;
        Ok(BrowserController::new(browser.uid, self.service.clone()))
    }

    /// The frontmost 2D viewer window
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no viewer window is open.
    #[instrument(skip(self))]
    pub async fn frontmost_viewer(&self) -> Result<ViewerController> {
        let response = self
            .service
            .clone()
            .frontmost_viewer(proto::Empty {})
            .await?
            .into_inner();
        check_found(response.status, "viewer window")?;
        let viewer = response
            .viewer
            .ok_or_else(|| Error::missing_field("viewer handle"))?;
        Ok(ViewerController::new(viewer.uid, self.service.clone()))
    }

    /// The frontmost volume render window
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no volume render window is open.
    #[instrument(skip(self))]
    pub async fn frontmost_vr_controller(&self) -> Result<VrController> {
        let response = self
            .service
            .clone()
            .frontmost_vr_controller(proto::Empty {})
            .await?
            .into_inner();
        check_found(response.status, "volume render window")?;
        let vr = response
            .vr_controller
            .ok_or_else(|| Error::missing_field("volume render handle"))?;
        Ok(VrController::new(vr.uid, self.service.clone()))
    }
}
