//! QR image for an event's dashboard link.

use std::io::Cursor;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

use super::dashboard_path;
use super::events::resolve_event;

/// GET /event/{slug}/qr/
///
/// A PNG QR code pointing at the event dashboard, for sharing the event
/// on printed flyers or a projected screen.
pub async fn event_qr(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let event = resolve_event(&state.pool, &slug).await?;

    let url = format!(
        "{}{}",
        state.config.public_base_url,
        dashboard_path(&event.slug)
    );
    let png = render_qr_png(&url)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}

/// Render a URL as a PNG-encoded QR code.
fn render_qr_png(url: &str) -> Result<Vec<u8>, AppError> {
    let code = QrCode::new(url.as_bytes())
        .map_err(|err| AppError::InternalError(format!("QR encoding failed: {err}")))?;
    let image = code.render::<Luma<u8>>().min_dimensions(240, 240).build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|err| AppError::InternalError(format!("PNG encoding failed: {err}")))?;
    Ok(png)
}
