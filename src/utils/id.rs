use crate::constants::REQUEST_ID_LENGTH;

const ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Generates the identifier attached to the tracing span of one API call.
///
/// The identifier is `REQUEST_ID_LENGTH` characters of uppercase letters and
/// digits produced by `nanoid`. It is only used to correlate log lines; it is
/// never sent to the server.
///
/// # Examples
/// ```
/// use bearer_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 12);
/// ```
#[must_use]
pub fn request_id() -> String {
    nanoid::nanoid!(REQUEST_ID_LENGTH, &ALPHABET)
}
