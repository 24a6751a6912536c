//! Integration tests for the flatsql workspace, split by layer.
