//! Email sender tests

mod mock_email_tests;
