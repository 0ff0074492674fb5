//! End-to-end checks of the command-line front end with in-memory I/O

use std::io::Cursor;

use tictactoe_history::{
    MoveOrder,
    cli::{
        commands::{outcome, play, replay},
        config::{OutputFormat, PlayConfig},
    },
};

fn quiet_config() -> PlayConfig {
    PlayConfig {
        show_help: false,
        ..PlayConfig::default()
    }
}

fn run_play(script: &str, config: &PlayConfig) -> String {
    let mut out = Vec::new();
    play::run(Cursor::new(script.to_string()), &mut out, config).unwrap();
    String::from_utf8(out).unwrap()
}

mod play_session {
    use super::*;

    #[test]
    fn win_is_announced() {
        let output = run_play("0\n4\n1\n3\n2\nquit\n", &quiet_config());
        assert!(output.contains("Winner: X"));
        assert!(output.contains("[X]|[X]|[X]"));
    }

    #[test]
    fn occupied_click_prints_nothing_new() {
        let once = run_play("4\n", &quiet_config());
        let twice = run_play("4\n4\n", &quiet_config());
        assert_eq!(once, twice);
    }

    #[test]
    fn jump_and_branch() {
        let output = run_play("0\n4\n8\njump 1\n5\n", &quiet_config());
        let last_frame = output.rsplit("Moves (").next().unwrap();
        assert!(last_frame.contains("Go to move #2"));
        assert!(!last_frame.contains("Go to move #3"));
        assert!(output.ends_with(">  2. (2, 1) Go to move #2\n"));
    }

    #[test]
    fn bad_input_is_explained_and_ignored() {
        let output = run_play("jump 7\nwhat\n", &quiet_config());
        assert!(output.contains("out of range"));
        assert!(output.contains("invalid command 'what'"));
        assert!(output.contains("Next player: X"));
    }

    #[test]
    fn toggle_reverses_move_list() {
        let output = run_play("0\ntoggle\n", &quiet_config());
        let last_frame = output.rsplit("Moves (").next().unwrap();
        assert!(last_frame.starts_with("descending):\n>  1."));
    }

    #[test]
    fn help_is_printed_on_start_by_default() {
        let output = run_play("", &PlayConfig::default());
        assert!(output.starts_with("Commands:"));
    }

    #[test]
    fn json_frames_when_configured() {
        let config = PlayConfig {
            format: OutputFormat::Json,
            ..quiet_config()
        };
        let output = run_play("q\n", &config);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["position"], 0);
        assert_eq!(value["moves"][0]["label"], "Go to game start");
    }
}

mod replay_command {
    use super::*;

    fn run(args: replay::ReplayArgs) -> anyhow::Result<String> {
        let mut out = Vec::new();
        replay::run(&args, &quiet_config(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn replays_and_jumps() {
        let output = run(replay::ReplayArgs {
            cells: vec![0, 4, 8],
            jump: Some(1),
            order: None,
            format: Some(OutputFormat::Json),
        })
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["position"], 1);
        assert_eq!(value["status"], "Next player: O");
        assert_eq!(value["moves"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn illegal_cells_are_skipped() {
        let output = run(replay::ReplayArgs {
            cells: vec![0, 0, 4],
            jump: None,
            order: Some(MoveOrder::Descending),
            format: None,
        })
        .unwrap();

        assert!(output.contains("Moves (descending):\n>  2. (1, 1) Go to move #2"));
    }

    #[test]
    fn jump_past_history_fails() {
        let err = run(replay::ReplayArgs {
            cells: vec![0],
            jump: Some(5),
            order: None,
            format: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("cannot jump to step 5"));
    }
}

mod outcome_command {
    use super::*;

    fn run(board: &str, format: OutputFormat) -> anyhow::Result<String> {
        let args = outcome::OutcomeArgs {
            board: board.to_string(),
            format: Some(format),
        };
        let mut out = Vec::new();
        outcome::run(&args, &quiet_config(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn reports_win_in_text() {
        let output = run("XXX OO. ...", OutputFormat::Text).unwrap();
        assert!(output.contains("X wins"));
        assert!(output.contains("[0, 1, 2]"));
        assert!(output.contains("Reachable:"));
    }

    #[test]
    fn reports_draw_in_json() {
        let output = run("XOXXOOOXX", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["outcome"], "Draw");
        assert_eq!(value["reachable"], true);
        assert_eq!(value["legal_moves"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn unparsable_board_is_an_error() {
        let err = run("XO", OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("cannot parse board"));
    }
}
