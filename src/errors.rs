use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(
    InvalidIouMessage,
    "Money request action '{report_action_id}' has an unreadable original message.",
    { report_action_id: &str }
);

// Snapshot-related.
define_client_error!(
    DuplicateSnapshotEntry,
    "Snapshot contains more than one {entity} with ID '{id}'.",
    { entity: &str, id: &str }
);
