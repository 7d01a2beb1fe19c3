//! Card download handler.

use std::sync::Arc;

use salvo::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    prelude::*,
};
use tracing::error;
use utsav::{
    card::{CardFace, ExportError},
    share::SharePayload,
};

use crate::{extensions::*, state::State};

fn into_status_error(error: &ExportError) -> StatusError {
    match error {
        ExportError::CaptureInFlight => {
            StatusError::conflict().brief("A card download is already in progress")
        }
        ExportError::Capture(source) => {
            error!("card capture failed: {source}");

            StatusError::bad_gateway().brief("Could not generate the card image")
        }
    }
}

/// Exports the greeting described by the share parameters as a PNG
/// download named after the recipient.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let query = req.uri().query().unwrap_or_default();

    let payload = SharePayload::decode(query)
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    let face = CardFace::from_payload(&payload);

    let download = state
        .exporter
        .export(&face)
        .await
        .map_err(|error| into_status_error(&error))?;

    res.add_header(
        CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", download.filename),
        true,
    )
    .or_500("failed to set content-disposition header")?
    .add_header(CONTENT_TYPE, "image/png", true)
    .or_500("failed to set content-type header")?;

    res.write_body(download.png)
        .or_500("failed to write card body")?;

    Ok(())
}
