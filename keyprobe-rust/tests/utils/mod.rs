pub mod mock_keyapi;
