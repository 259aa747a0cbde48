/// Image host integration
///
/// Two concerns live here:
/// - pushing admin-selected photos to the hosting API (unsigned multipart
///   upload returning a public URL)
/// - pulling published photos back down and shrinking them to card size for
///   the gallery
use serde::Deserialize;

use crate::config::AppConfig;

use super::error::UploadError;

/// Target width for gallery card images; fetched photos are downscaled to
/// this before being handed to the renderer.
pub const CARD_IMAGE_WIDTH: u32 = 720;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
}

/// Decoded, card-sized pixels ready for the UI to wrap in an image handle.
#[derive(Debug, Clone)]
pub struct CardImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ImageHost {
    client: reqwest::Client,
    cloud_name: String,
    upload_preset: String,
}

impl ImageHost {
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        if !config.has_image_host() {
            return None;
        }
        Some(Self {
            client: reqwest::Client::new(),
            cloud_name: config.cloud_name.clone(),
            upload_preset: config.upload_preset.clone(),
        })
    }

    /// Upload raw image bytes and return the public URL to store on the
    /// project. A failure here must block the dependent insert: a project
    /// may never reference an image that was not actually published.
    pub async fn upload(&self, file_name: String, bytes: Vec<u8>) -> Result<String, UploadError> {
        let url = format!(
            "https://api.cloudinary.com/v1_1/{}/image/upload",
            self.cloud_name
        );

        let form = reqwest::multipart::Form::new()
            .text("upload_preset", self.upload_preset.clone())
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name),
            );

        let response = self.client.post(url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "image host rejected the upload");
            return Err(UploadError::Status(status));
        }

        let body: UploadResponse = response.json().await?;
        body.secure_url.ok_or(UploadError::MissingUrl)
    }
}

/// Fetch a published photo and shrink it to card size.
///
/// Decoding and resizing are CPU-bound, so they run on a blocking thread;
/// the error is a plain string because it only ever feeds the status line.
pub async fn fetch_card_image(
    client: reqwest::Client,
    url: String,
) -> Result<CardImage, String> {
    let bytes = client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("download failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("download failed: {e}"))?
        .bytes()
        .await
        .map_err(|e| format!("download failed: {e}"))?;

    tokio::task::spawn_blocking(move || decode_card_image(&bytes))
        .await
        .map_err(|e| format!("task join error: {e}"))?
}

fn decode_card_image(bytes: &[u8]) -> Result<CardImage, String> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| format!("could not decode image: {e}"))?;

    // thumbnail() preserves aspect ratio within the given bounds
    let card = decoded.thumbnail(CARD_IMAGE_WIDTH, CARD_IMAGE_WIDTH * 2);
    let rgba = card.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(CardImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_downscales_to_card_width() {
        // 1600x800 synthetic image; card width is 720, so expect 720x360.
        let big = image::RgbaImage::from_pixel(1600, 800, image::Rgba([180, 160, 120, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(big)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();

        let card = decode_card_image(&bytes).unwrap();
        assert_eq!(card.width, CARD_IMAGE_WIDTH);
        assert_eq!(card.height, 360);
        assert_eq!(card.rgba.len(), (card.width * card.height * 4) as usize);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_card_image(&[0u8; 16]).is_err());
    }

    #[test]
    fn test_small_images_are_not_upscaled() {
        let small = image::RgbaImage::from_pixel(100, 80, image::Rgba([0, 0, 0, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(small)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();

        let card = decode_card_image(&bytes).unwrap();
        assert_eq!((card.width, card.height), (100, 80));
    }
}
