//! End-to-end control-loop scenarios: scripted sensor timelines through
//! `AppService::tick`, assertions on the actuator command history.

use shedheater::app::commands::AppCommand;
use shedheater::app::service::AppService;
use shedheater::clock::Instant;
use shedheater::config::SystemConfig;

use crate::mock_hw::{ActuatorCall, MockHardware, RecordingSink};

fn t(ms: u32) -> Instant {
    Instant::from_millis(ms)
}

/// Test configuration: 1 s internal sensor cadence so a 1 s tick sees a
/// fresh reading every tick; thermostat at 6 C +/- 1 C.
fn config() -> SystemConfig {
    SystemConfig {
        setpoint_c: 6.0,
        hysteresis_c: 1.0,
        internal_read_interval_ms: 1000,
        ..SystemConfig::default()
    }
}

fn service(boot: Instant) -> (AppService, MockHardware, RecordingSink) {
    let mut app = AppService::new(boot, config());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

#[test]
fn reference_temperature_sequence_drives_heater() {
    let (mut app, mut hw, mut sink) = service(t(0));

    let temps = [7.0, 6.5, 5.0, 4.0, 6.0, 6.8, 7.2];
    let expected = [false, false, true, true, true, true, false];

    for (i, (temp, want)) in temps.iter().zip(expected).enumerate() {
        hw.set_internal_temp(*temp);
        app.tick(t(i as u32 * 1000), &mut hw, &mut sink);
        assert_eq!(hw.heater_on(), want, "tick {i}, temp {temp}");
    }
    assert_eq!(app.tick_count(), temps.len() as u64);
}

#[test]
fn fan_overrun_window_is_exact() {
    let (mut app, mut hw, mut sink) = service(t(0));

    hw.set_internal_temp(4.0);
    app.tick(t(1_000), &mut hw, &mut sink);
    assert!(hw.heater_on());
    assert!(hw.fan_on(), "fan interlocked while heating");

    // Heater switches off at t=2 s; overrun is 30 s from there.
    hw.set_internal_temp(7.2);
    app.tick(t(2_000), &mut hw, &mut sink);
    assert!(!hw.heater_on());
    assert!(hw.fan_on());

    app.tick(t(31_999), &mut hw, &mut sink);
    assert!(hw.fan_on(), "one ms inside the overrun window");

    app.tick(t(32_001), &mut hw, &mut sink);
    assert!(!hw.fan_on(), "one ms past the overrun window");

    // Telemetry reports time since the genuine shutoff, not a boot seed.
    assert_eq!(app.snapshot(t(32_001)).secs_since_heater_off, Some(30));
}

#[test]
fn overrun_rearms_across_back_to_back_heating_cycles() {
    let (mut app, mut hw, mut sink) = service(t(0));

    hw.set_internal_temp(4.0);
    app.tick(t(1_000), &mut hw, &mut sink);
    hw.set_internal_temp(7.2);
    app.tick(t(10_000), &mut hw, &mut sink); // first shutoff
    hw.set_internal_temp(4.0);
    app.tick(t(20_000), &mut hw, &mut sink); // heating again
    hw.set_internal_temp(7.2);
    app.tick(t(25_000), &mut hw, &mut sink); // second shutoff

    // Continuously on from the first shutoff until 30 s after the second.
    for probe in [30_000, 40_000, 54_999] {
        app.tick(t(probe), &mut hw, &mut sink);
        assert!(hw.fan_on(), "fan must hold through t={probe}");
    }
    app.tick(t(55_001), &mut hw, &mut sink);
    assert!(!hw.fan_on());
}

#[test]
fn sensor_dead_from_boot_keeps_everything_off() {
    let (mut app, mut hw, mut sink) = service(t(0));
    hw.fail_internal();
    hw.external = Err(shedheater::SensorError::OutOfRange);

    for s in 0..120u32 {
        app.tick(t(s * 1000), &mut hw, &mut sink);
    }
    assert!(!hw.calls.contains(&ActuatorCall::Heater(true)));
    assert!(!hw.calls.contains(&ActuatorCall::Fan(true)));

    let snap = app.snapshot(t(120_000));
    assert!(snap.internal_temperature_c.is_none());
    assert!(snap.external_temperature_c.is_none());
}

#[test]
fn stale_reading_keeps_thermostat_running_through_dropouts() {
    let (mut app, mut hw, mut sink) = service(t(0));

    hw.set_internal_temp(4.0);
    app.tick(t(0), &mut hw, &mut sink);
    assert!(hw.heater_on());

    // Sensor drops out: the last known good reading keeps the decision.
    hw.fail_internal();
    for s in 1..30u32 {
        app.tick(t(s * 1000), &mut hw, &mut sink);
        assert!(hw.heater_on(), "dropout at t={s}s must not cut heat");
    }

    let snap = app.snapshot(t(30_000));
    assert_eq!(snap.internal_temperature_c, Some(4.0));
}

#[test]
fn heater_runtime_satisfies_circulation_quota() {
    let (mut app, mut hw, mut sink) = service(t(0));

    // Heater runs for ~400 s at the start of the schedule window, then
    // idles for the rest of the hour.
    for s in 0..=3_700u32 {
        hw.set_internal_temp(if s <= 400 { 4.0 } else { 7.2 });
        app.tick(t(s * 1000), &mut hw, &mut sink);
    }

    // 400 s of heating + 30 s overrun is well past the 300 s quota:
    // the hour rollover must not start a dedicated run.
    assert_eq!(sink.count_scheduled_starts(), 0);
    assert!(!hw.fan_on());
}

#[test]
fn short_heating_window_still_gets_a_scheduled_run() {
    let (mut app, mut hw, mut sink) = service(t(0));

    for s in 0..=4_000u32 {
        hw.set_internal_temp(if s <= 100 { 4.0 } else { 7.2 });
        app.tick(t(s * 1000), &mut hw, &mut sink);

        if s == 3_650 {
            assert!(hw.fan_on(), "scheduled run active at t={s}s");
        }
        if s == 3_950 {
            assert!(!hw.fan_on(), "scheduled run finished by t={s}s");
        }
    }

    // ~130 s of fan time in the window is below the 300 s quota.
    assert_eq!(sink.count_scheduled_starts(), 1);
}

#[test]
fn idle_shed_gets_circulation_every_hour() {
    let (mut app, mut hw, mut sink) = service(t(0));

    // Warm shed, heater never runs: only the schedule moves the fan.
    // Each hourly window must get its own run; a run's own on-time
    // must not carry over and satisfy the next window's quota.
    hw.set_internal_temp(15.0);
    for s in 0..=11_200u32 {
        app.tick(t(s * 1000), &mut hw, &mut sink);
    }
    assert_eq!(
        sink.count_scheduled_starts(),
        3,
        "windows without circulation were skipped"
    );
    assert!(!hw.fan_on());
}

#[test]
fn survives_millisecond_counter_wrap() {
    let boot = t(u32::MAX - 5_000);
    let (mut app, mut hw, mut sink) = service(boot);

    hw.set_internal_temp(4.0);
    for s in 0..60u32 {
        app.tick(boot.advanced(s * 1000), &mut hw, &mut sink);
        assert!(hw.heater_on(), "heat must hold across the wrap (s={s})");
        assert!(hw.fan_on());
    }

    // Shutoff and overrun expiry both land after the wrap point.
    hw.set_internal_temp(7.2);
    app.tick(boot.advanced(60_000), &mut hw, &mut sink);
    assert!(!hw.heater_on());
    assert!(hw.fan_on());
    app.tick(boot.advanced(90_001), &mut hw, &mut sink);
    assert!(!hw.fan_on());
}

#[test]
fn snapshot_reflects_controller_state() {
    let (mut app, mut hw, mut sink) = service(t(0));

    hw.set_internal_temp(4.0);
    hw.external = Ok(2.5);
    app.tick(t(0), &mut hw, &mut sink);

    let snap = app.snapshot(t(0));
    assert_eq!(snap.internal_temperature_c, Some(4.0));
    assert_eq!(snap.humidity_pct, Some(50.0));
    assert_eq!(snap.external_temperature_c, Some(2.5));
    assert!(snap.heater_on);
    assert!(snap.fan_on);
    assert!(!snap.fan_scheduled_run);
    // No shutoff has happened yet.
    assert!(snap.secs_since_heater_off.is_none());
}

#[test]
fn config_update_applies_between_ticks() {
    let (mut app, mut hw, mut sink) = service(t(0));

    hw.set_internal_temp(10.0);
    app.tick(t(0), &mut hw, &mut sink);
    assert!(!hw.heater_on());

    // Raise the setpoint well above ambient: next tick must heat.
    app.handle_command(AppCommand::UpdateConfig(SystemConfig {
        setpoint_c: 20.0,
        ..config()
    }));
    app.tick(t(1_000), &mut hw, &mut sink);
    assert!(hw.heater_on());
}
