use std::time::Duration;

// Default URLs
pub static DEFAULT_LIVE_URL: &str = "https://api.paysafe.com";
pub static DEFAULT_TEST_URL: &str = "https://api.test.paysafe.com";

// Every endpoint lives under this prefix
pub static PAYMENT_HUB_PATH: &str = "/paymenthub";

// Header names
pub static INTERNAL_CORRELATION_ID_HEADER: &str = "X-INTERNAL-CORRELATION-ID";
pub static TRANSACTION_SOURCE_HEADER: &str = "x-transaction-source";
pub static SIMULATOR_HEADER: &str = "Simulator";

// Header values
pub static TRANSACTION_SOURCE: &str = "RustSDK";
pub static CONTENT_TYPE_JSON_UTF8: &str = "application/json;charset=utf-8";

// Client defaults and limits
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_AUTOMATIC_RETRIES: u32 = 2;
pub const MAX_AUTOMATIC_RETRIES_LIMIT: u32 = 5;

// Messages shared by client and request options validation
pub static MESSAGE_BLANK_API_KEY: &str =
    "You must provide non-blank api key in format 'username:password'";
pub static MESSAGE_INVALID_API_KEY_FORMAT: &str =
    "Api key does not match format 'username:password'";
pub static MESSAGE_MAX_AUTOMATIC_RETRIES_LIMIT: &str =
    "Maximum allowed number of automatic retries is 5";
pub static MESSAGE_CONNECT_TIMEOUT_NOT_POSITIVE: &str = "Connect timeout must be a positive value";
pub static MESSAGE_RESPONSE_TIMEOUT_NOT_POSITIVE: &str =
    "Response timeout must be a positive value";

// Messages of API errors
pub static MESSAGE_REQUEST_UNSUCCESSFUL: &str = "Paysafe Payments API request unsuccessful";
pub static MESSAGE_UNPROCESSABLE_ERROR_RESPONSE: &str =
    "Exception while processing error response from PaymentsAPI";
