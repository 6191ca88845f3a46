//! Wallpaper URL resolution with a keyless fallback image source.

use crate::assistant::{AssistantError, AssistantService, ImageRequest};

/// Base URL of the prompt-addressed image service used when generation fails.
pub const FALLBACK_IMAGE_BASE_URL: &str = "https://pollinations.ai/p/";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of [`resolve_wallpaper_url`].
pub struct ResolvedWallpaper {
    /// URL to use as the desktop background.
    pub url: String,
    /// Why the primary generator was skipped, when the fallback was used.
    pub fallback_reason: Option<AssistantError>,
}

impl ResolvedWallpaper {
    /// Returns whether the fallback source was used.
    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

/// Builds a `data:` URL from a base64 image payload.
pub fn image_data_url(mime_type: Option<&str>, base64: &str) -> String {
    let mime_type = mime_type
        .map(str::trim)
        .filter(|mime| !mime.is_empty())
        .unwrap_or("image/png");
    format!("data:{mime_type};base64,{base64}")
}

/// Builds the fallback image URL for `prompt`.
///
/// # Errors
///
/// Returns [`AssistantError::EmptyPrompt`] when `prompt` is blank.
pub fn fallback_wallpaper_url(prompt: &str, seed: u64) -> Result<String, AssistantError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(AssistantError::EmptyPrompt);
    }
    Ok(format!(
        "{FALLBACK_IMAGE_BASE_URL}{}?width=1920&height=1080&seed={seed}",
        urlencoding::encode(prompt)
    ))
}

/// Generates a wallpaper through `service`, degrading to the fallback source on any failure.
///
/// A primary failure is not an error here: the caller receives a usable URL together with the
/// reason in [`ResolvedWallpaper::fallback_reason`].
///
/// # Errors
///
/// Returns [`AssistantError::EmptyPrompt`] only when no fallback URL can be built either.
pub async fn resolve_wallpaper_url<S: AssistantService + ?Sized>(
    service: &S,
    request: &ImageRequest,
    seed: u64,
) -> Result<ResolvedWallpaper, AssistantError> {
    let fallback_reason = match service.generate_image(request).await {
        Ok(url) if !url.trim().is_empty() => {
            return Ok(ResolvedWallpaper {
                url,
                fallback_reason: None,
            })
        }
        Ok(_) => AssistantError::EmptyResponse,
        Err(err) => err,
    };

    Ok(ResolvedWallpaper {
        url: fallback_wallpaper_url(&request.prompt, seed)?,
        fallback_reason: Some(fallback_reason),
    })
}

/// Returns a seed that varies between calls so repeated prompts yield different fallback images.
pub fn wallpaper_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 1_000_000_000.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        crate::time::next_monotonic_timestamp_ms() % 1_000_000_000
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::assistant::{AssistantFuture, ChatRequest, NoopAssistantService};

    struct FixedImageService(Result<String, AssistantError>);

    impl AssistantService for FixedImageService {
        fn chat<'a>(
            &'a self,
            _request: &'a ChatRequest,
        ) -> AssistantFuture<'a, Result<String, AssistantError>> {
            Box::pin(async { Err(AssistantError::EmptyResponse) })
        }

        fn generate_image<'a>(
            &'a self,
            _request: &'a ImageRequest,
        ) -> AssistantFuture<'a, Result<String, AssistantError>> {
            let result = self.0.clone();
            Box::pin(async move { result })
        }
    }

    fn request(prompt: &str) -> ImageRequest {
        ImageRequest {
            api_key: "key".to_string(),
            prompt: prompt.to_string(),
        }
    }

    #[test]
    fn fallback_url_encodes_prompt() {
        assert_eq!(
            fallback_wallpaper_url("neon city & rain", 42).expect("url"),
            "https://pollinations.ai/p/neon%20city%20%26%20rain?width=1920&height=1080&seed=42"
        );
        assert_eq!(
            fallback_wallpaper_url("   ", 1),
            Err(AssistantError::EmptyPrompt)
        );
    }

    #[test]
    fn primary_result_is_used_when_available() {
        let service = FixedImageService(Ok("data:image/png;base64,AAAA".to_string()));
        let resolved = block_on(resolve_wallpaper_url(&service, &request("sunset"), 7)).expect("ok");
        assert_eq!(resolved.url, "data:image/png;base64,AAAA");
        assert!(!resolved.is_fallback());
    }

    #[test]
    fn failing_primary_still_resolves_to_fallback_url() {
        let service = FixedImageService(Err(AssistantError::Status {
            status: 403,
            body: "forbidden".to_string(),
        }));
        let resolved = block_on(resolve_wallpaper_url(&service, &request("sunset"), 7)).expect("ok");
        assert_eq!(
            resolved.url,
            "https://pollinations.ai/p/sunset?width=1920&height=1080&seed=7"
        );
        assert!(resolved.is_fallback());

        let resolved =
            block_on(resolve_wallpaper_url(&NoopAssistantService, &request("dunes"), 3))
                .expect("ok");
        assert!(resolved.url.starts_with(FALLBACK_IMAGE_BASE_URL));
    }

    #[test]
    fn blank_primary_url_falls_back() {
        let service = FixedImageService(Ok("  ".to_string()));
        let resolved = block_on(resolve_wallpaper_url(&service, &request("sea"), 1)).expect("ok");
        assert_eq!(resolved.fallback_reason, Some(AssistantError::EmptyResponse));
    }

    #[test]
    fn data_url_defaults_mime_type() {
        assert_eq!(image_data_url(None, "QUJD"), "data:image/png;base64,QUJD");
        assert_eq!(
            image_data_url(Some("image/jpeg"), "QUJD"),
            "data:image/jpeg;base64,QUJD"
        );
    }
}
