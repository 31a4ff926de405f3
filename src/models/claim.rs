use url::Url;

/// One claim to verify, in one of the three input modes.
/// Lives for the duration of a single request.
#[derive(Clone, Debug)]
pub enum ClaimRequest {
    Text {
        claim: String,
    },
    Image {
        bytes: Vec<u8>,
        /// Raw filename extension, without the dot. May be empty.
        extension: String,
        query: Option<String>,
    },
    Social {
        url: Url,
        claim_hint: String,
    },
}
