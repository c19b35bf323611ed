use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
use url::Url;

use super::ImageFormat;
use crate::domain::DomainError;

/// An image handed to the vision service, either by URL or inline bytes.
///
/// The HTTP API only analyzes URLs; the `analyze` command sends local files
/// as bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    Url(String),
    Bytes { data: Bytes, format: ImageFormat },
}

impl ImageReference {
    /// Build a URL reference. Only absolute `http`/`https` URLs are accepted.
    pub fn url(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        let trimmed = url.trim();

        if trimmed.is_empty() {
            return Err(DomainError::validation("Image URL cannot be empty"));
        }

        let parsed = Url::parse(trimmed).map_err(|e| {
            DomainError::validation(format!("Invalid image URL '{}': {}", trimmed, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::validation(format!(
                "Unsupported image URL scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self::Url(trimmed.to_string()))
    }

    pub fn bytes(data: impl Into<Bytes>, format: ImageFormat) -> Self {
        Self::Bytes {
            data: data.into(),
            format,
        }
    }

    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Bytes { .. } => None,
        }
    }
}

/// Decoded inline image payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub data: Bytes,
    pub format: ImageFormat,
}

/// Decode a base64 image, optionally wrapped in a `data:<mime>;base64,` URL.
///
/// The format comes from the data-URL mime when present, otherwise from the
/// magic bytes of the decoded payload.
pub fn decode_base64_image(payload: &str) -> Result<DecodedImage, DomainError> {
    let payload = payload.trim();

    if payload.is_empty() {
        return Err(DomainError::validation("Missing 'image' in request"));
    }

    let (declared, encoded) = match payload.strip_prefix("data:") {
        Some(rest) => {
            let (header, data) = rest.split_once(',').ok_or_else(|| {
                DomainError::validation("Malformed data URL: missing ',' separator")
            })?;
            let header = header.strip_suffix(";base64").ok_or_else(|| {
                DomainError::validation("Malformed data URL: only base64 payloads are supported")
            })?;
            // Parameters such as `;name=a.png` follow the mime type
            let mime = header.split(';').next().unwrap_or_default();
            (Some(ImageFormat::from_mime(mime)?), data)
        }
        None => (None, payload),
    };

    let data = STANDARD
        .decode(encoded.trim())
        .map_err(|e| DomainError::validation(format!("Invalid base64 image data: {}", e)))?;

    if data.is_empty() {
        return Err(DomainError::validation("Decoded image is empty"));
    }

    let format = match declared {
        Some(format) => format,
        None => ImageFormat::sniff(&data).ok_or_else(|| {
            DomainError::unsupported_format("Decoded data is not a png, jpeg or gif image")
        })?,
    };

    Ok(DecodedImage {
        data: Bytes::from(data),
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_url_reference_rejects_blank() {
        assert!(matches!(
            ImageReference::url("   ").unwrap_err(),
            DomainError::Validation { .. }
        ));

        let reference = ImageReference::url(" https://example.com/a.png ").unwrap();
        assert_eq!(reference.as_url(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_url_reference_rejects_non_http_urls() {
        for input in ["not a url", "/imgs/a.png", "ftp://example.com/a.png", "file:///etc/passwd"] {
            let err = ImageReference::url(input).unwrap_err();
            assert!(matches!(err, DomainError::Validation { .. }), "{input}");
        }
    }

    #[test]
    fn test_decode_data_url_with_parameters() {
        let payload = format!("data:image/png;name=a.png;base64,{}", STANDARD.encode(PNG_HEADER));

        let decoded = decode_base64_image(&payload).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!(decoded.data.as_ref(), &PNG_HEADER);
    }

    #[test]
    fn test_decode_strips_data_url_prefix() {
        let encoded = STANDARD.encode([0xFF, 0xD8, 0xFF, 0xE0, 0x01]);
        let payload = format!("data:image/jpeg;base64,{}", encoded);

        let decoded = decode_base64_image(&payload).unwrap();
        assert_eq!(decoded.format, ImageFormat::Jpeg);
        assert_eq!(decoded.data.as_ref(), &[0xFF, 0xD8, 0xFF, 0xE0, 0x01]);
    }

    #[test]
    fn test_decode_sniffs_bare_payload() {
        let encoded = STANDARD.encode(PNG_HEADER);

        let decoded = decode_base64_image(&encoded).unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_base64_image("not base64 !!!").unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let err = decode_base64_image("").unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn test_decode_rejects_non_image_bytes() {
        let encoded = STANDARD.encode(b"plain text");
        let err = decode_base64_image(&encoded).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_decode_rejects_unsupported_data_url_mime() {
        let payload = format!("data:image/bmp;base64,{}", STANDARD.encode(b"BM"));
        let err = decode_base64_image(&payload).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedFormat { .. }));
    }
}
