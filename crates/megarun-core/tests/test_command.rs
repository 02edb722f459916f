//! Tests for launcher command construction and dispatch

use megarun_core::LauncherInvocation;

fn invocation() -> LauncherInvocation {
    LauncherInvocation {
        program: "deepspeed".to_string(),
        num_nodes: 16,
        num_gpus: 8,
        entry_point: "pretrain_gpt2.py".to_string(),
        passthrough: vec!["--extra".to_string(), "value with space".to_string()],
        options: vec!["--model-parallel-size".to_string(), "4".to_string()],
    }
}

#[test]
fn test_argv_layout() {
    let argv = invocation().argv();
    assert_eq!(
        argv,
        vec![
            "--num_nodes",
            "16",
            "--num_gpus",
            "8",
            "pretrain_gpt2.py",
            "--extra",
            "value with space",
            "--model-parallel-size",
            "4",
        ]
    );
}

#[test]
fn test_passthrough_precedes_options() {
    let argv = invocation().argv();
    let extra = argv.iter().position(|a| a == "--extra").expect("passthrough missing");
    let mp = argv
        .iter()
        .position(|a| a == "--model-parallel-size")
        .expect("options missing");
    let entry = argv
        .iter()
        .position(|a| a == "pretrain_gpt2.py")
        .expect("entry point missing");
    assert!(entry < extra);
    assert!(extra < mp);
}

#[test]
fn test_render_starts_with_program() {
    let rendered = invocation().render();
    assert!(rendered.starts_with("deepspeed --num_nodes 16 --num_gpus 8 pretrain_gpt2.py"));
}

#[test]
fn test_spawn_propagates_success() {
    let invocation = LauncherInvocation {
        program: "true".to_string(),
        num_nodes: 1,
        num_gpus: 1,
        entry_point: String::new(),
        passthrough: Vec::new(),
        options: Vec::new(),
    };
    let code = invocation.spawn().expect("spawn failed");
    assert_eq!(code, 0);
}

#[test]
fn test_spawn_propagates_failure_code() {
    // `false` ignores its arguments and exits 1
    let invocation = LauncherInvocation {
        program: "false".to_string(),
        num_nodes: 1,
        num_gpus: 1,
        entry_point: String::new(),
        passthrough: Vec::new(),
        options: Vec::new(),
    };
    let code = invocation.spawn().expect("spawn failed");
    assert_eq!(code, 1);
}

#[test]
fn test_spawn_missing_program_is_an_error() {
    let invocation = LauncherInvocation {
        program: "megarun-no-such-launcher".to_string(),
        num_nodes: 1,
        num_gpus: 1,
        entry_point: String::new(),
        passthrough: Vec::new(),
        options: Vec::new(),
    };
    assert!(invocation.spawn().is_err());
}
