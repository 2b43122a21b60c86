//! Integration test suite: full `AppService` control-loop scenarios
//! against mock hardware.

mod control_loop_tests;
mod mock_hw;
