// tests/facade_commands.rs

use cmm::ControlMyMonitor;
use cmm::errors::CmmError;
use cmm_test_utils::argv;
use cmm_test_utils::fake_executor::{EchoExecutor, ScriptedExecutor};
use cmm_test_utils::init_tracing;

fn facade() -> ControlMyMonitor<EchoExecutor> {
    init_tracing();
    ControlMyMonitor::with_executor(EchoExecutor::new())
}

#[test]
fn set_value_matches_documented_argv() {
    let cmm = facade();

    cmm.set_value("monitor1", "VCPCode1", "value1").unwrap();

    assert_eq!(
        cmm.executor().only_call(),
        argv(&["/SetValue", "monitor1", "VCPCode1", "value1"])
    );
}

#[test]
fn set_value_if_needed_and_change_value() {
    let cmm = facade();

    cmm.set_value_if_needed(r"\\.\DISPLAY1\Monitor0", "10", "70").unwrap();
    cmm.change_value("Primary", "10", "-5").unwrap();

    assert_eq!(
        cmm.executor().calls(),
        vec![
            argv(&["/SetValueIfNeeded", r"\\.\DISPLAY1\Monitor0", "10", "70"]),
            argv(&["/ChangeValue", "Primary", "10", "-5"]),
        ]
    );
}

#[test]
fn switch_value_keeps_value_order_after_monitor_and_code() {
    let cmm = facade();

    cmm.switch_value("Primary", "60", ["17", "15", "3"]).unwrap();

    assert_eq!(
        cmm.executor().only_call(),
        argv(&["/SwitchValue", "Primary", "60", "17", "15", "3"])
    );
}

#[test]
fn switch_value_with_owned_values() {
    let cmm = facade();
    let values = vec!["1".to_string(), "4".to_string()];

    cmm.switch_value("Secondary", "D6", values).unwrap();

    assert_eq!(
        cmm.executor().only_call(),
        argv(&["/SwitchValue", "Secondary", "D6", "1", "4"])
    );
}

#[test]
fn power_commands_take_only_the_monitor() {
    let cmm = facade();

    cmm.turn_off("Primary").unwrap();
    cmm.turn_on("Primary").unwrap();
    cmm.switch_off_on("Primary").unwrap();

    assert_eq!(
        cmm.executor().calls(),
        vec![
            argv(&["/TurnOff", "Primary"]),
            argv(&["/TurnOn", "Primary"]),
            argv(&["/SwitchOffOn", "Primary"]),
        ]
    );
}

#[test]
fn config_commands_put_filename_before_monitor() {
    let cmm = facade();

    cmm.save_config(r"C:\temp\mon.cfg", "Primary").unwrap();
    cmm.load_config(r"C:\temp\mon.cfg", "Primary").unwrap();

    assert_eq!(
        cmm.executor().calls(),
        vec![
            argv(&["/SaveConfig", r"C:\temp\mon.cfg", "Primary"]),
            argv(&["/LoadConfig", r"C:\temp\mon.cfg", "Primary"]),
        ]
    );
}

#[test]
fn get_value_runs_once_and_returns_output_verbatim() {
    init_tracing();
    let cmm = ControlMyMonitor::with_executor(ScriptedExecutor::output("  70\r\n"));

    let value = cmm.get_value("Primary", "10").unwrap();

    assert_eq!(value, "  70\r\n");
    assert_eq!(
        cmm.executor().calls(),
        vec![argv(&["/GetValue", "Primary", "10"])]
    );
}

#[test]
fn get_value_with_echo_executor_returns_its_argv() {
    let cmm = facade();

    assert_eq!(cmm.get_value("Primary", "60").unwrap(), "/GetValue Primary 60");
    assert_eq!(cmm.executor().calls().len(), 1);
}

#[test]
fn executor_failure_is_propagated_unchanged() {
    init_tracing();
    let cmm = ControlMyMonitor::with_executor(ScriptedExecutor::failing(2));

    match cmm.set_value("Primary", "10", "50") {
        Err(CmmError::CommandFailed { code, .. }) => assert_eq!(code, Some(2)),
        other => panic!("expected CommandFailed, got {other:?}"),
    }
    assert!(matches!(
        cmm.get_value("Primary", "10"),
        Err(CmmError::CommandFailed { code: Some(2), .. })
    ));
    // no retries
    assert_eq!(cmm.executor().calls().len(), 2);
}

#[test]
fn arguments_are_not_validated_locally() {
    let cmm = facade();

    cmm.set_value("", "not-a-code", "99999").unwrap();

    assert_eq!(
        cmm.executor().only_call(),
        argv(&["/SetValue", "", "not-a-code", "99999"])
    );
}

#[test]
fn repeated_command_produces_identical_invocations() {
    let cmm = facade();

    cmm.turn_on("Primary").unwrap();
    cmm.turn_on("Primary").unwrap();

    let calls = cmm.executor().calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn facade_can_share_an_executor_by_reference() {
    init_tracing();
    let echo = EchoExecutor::new();
    let cmm = ControlMyMonitor::with_executor(&echo);

    cmm.turn_off("Primary").unwrap();

    assert_eq!(echo.only_call(), argv(&["/TurnOff", "Primary"]));
}
