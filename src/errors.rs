use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_internal_error!(WriteError, "Error writing ledger output.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidDecimal, "Invalid decimal number: '{value}'.", { value: &str });
define_client_error!(
    InvalidBookingMethod,
    "Invalid booking method: '{method}'.",
    { method: &str }
);

// Record-related.
define_client_error!(
    UnsupportedRecordKind,
    "Unsupported record kind '{kind}' (dated {date}).",
    { date: &NaiveDate, kind: &str }
);
define_client_error!(
    MissingRecordField,
    "Record '{kind}' dated {date} is missing required field '{field}'.",
    { date: &NaiveDate, kind: &str, field: &str }
);
define_client_error!(
    PositionWithoutCurrency,
    "Record '{kind}' dated {date}: first posting position '{position}' has no currency to align on.",
    { date: &NaiveDate, kind: &str, position: &str }
);

// Configuration-related.
define_client_error!(
    InvalidCurrencyColumn,
    "Invalid target currency column: {column}. Must be at least 1.",
    { column: usize }
);
