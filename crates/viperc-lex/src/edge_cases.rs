//! Edge case tests for viperc-lex
