// End-to-end tests for the Resource Directory API
//
// Each test boots the full router on an ephemeral port, backed by the
// built-in seed catalog (21 resources, two of them sponsored), and drives it
// over HTTP. Every test gets its own catalog and session store, so tests run
// in parallel without sharing state.

mod test_sessions;
