use cidian_client::{FetchError, YoudaoClient};
use cidian_core::{LookupResult, Palette};

/// Fetch, extract and format one word
pub async fn lookup(
    client: &YoudaoClient,
    word: &str,
    example_count: usize,
    palette: Palette,
) -> Result<String, FetchError> {
    let response = client.fetch(word).await?;
    let result = LookupResult::from_response(&response, example_count);

    Ok(result.render(word, palette))
}
