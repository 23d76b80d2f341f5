use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use super::Platform;
use crate::error::{CoreError, CoreResult};
use crate::platform::types::{Hotkey, MediaKey, RunningProcess};

/// Drives the host through its own command-line tools.
#[derive(Debug, Default)]
pub struct PortablePlatform;

impl PortablePlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for PortablePlatform {
    fn id(&self) -> &str {
        std::env::consts::OS
    }

    fn launch(&self, command: &str) -> CoreResult<()> {
        let (program, args) = split_launch_command(command)
            .ok_or_else(|| CoreError::InvalidInput("empty launch command".to_string()))?;
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|error| CoreError::Internal(format!("failed to launch {program}: {error}")))?;
        Ok(())
    }

    fn list_processes(&self) -> CoreResult<Vec<RunningProcess>> {
        list_processes_native()
    }

    fn terminate_process(&self, pid: u32) -> CoreResult<()> {
        terminate_process_native(pid)
    }

    fn open_path(&self, path: &Path) -> CoreResult<()> {
        open::that(path).map_err(|error| {
            CoreError::Internal(format!("failed to open {}: {error}", path.display()))
        })
    }

    fn open_url(&self, url: &str) -> CoreResult<()> {
        open::that(url).map_err(|error| CoreError::Internal(format!("failed to open {url}: {error}")))
    }

    fn press_key(&self, key: MediaKey) -> CoreResult<()> {
        press_key_native(key)
    }

    fn send_hotkey(&self, hotkey: Hotkey) -> CoreResult<()> {
        send_hotkey_native(hotkey)
    }

    fn capture_screenshot(&self, output_path: &Path) -> CoreResult<()> {
        capture_screenshot_native(output_path)
    }

    fn lock_screen(&self) -> CoreResult<()> {
        lock_screen_native()
    }
}

/// An existing path is launched as-is, even if it contains spaces;
/// otherwise the value is split on whitespace into program and arguments.
fn split_launch_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let command = command.trim();
    if command.is_empty() {
        return None;
    }
    if Path::new(command).exists() {
        return Some((command, Vec::new()));
    }
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

fn run(program: &str, args: &[&str]) -> CoreResult<()> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|error| CoreError::Internal(format!("failed to run {program}: {error}")))?;
    ensure_command_success(status, program)
}

#[cfg_attr(not(any(unix, windows)), allow(dead_code))]
fn run_capture(program: &str, args: &[&str]) -> CoreResult<String> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|error| CoreError::Internal(format!("failed to run {program}: {error}")))?;
    ensure_command_success(output.status, program)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn ensure_command_success(status: ExitStatus, command_label: &str) -> CoreResult<()> {
    if status.success() {
        Ok(())
    } else {
        Err(CoreError::Internal(format!(
            "{command_label} failed with status {status}"
        )))
    }
}

/// Parse `ps -A -o pid= -o comm=` output.
#[cfg_attr(not(unix), allow(dead_code))]
fn parse_ps_output(output: &str) -> Vec<RunningProcess> {
    output
        .lines()
        .filter_map(|line| {
            let (pid, name) = line.trim().split_once(char::is_whitespace)?;
            let pid = pid.parse().ok()?;
            let name = name.trim();
            let name = name.rsplit('/').next().unwrap_or(name);
            Some(RunningProcess {
                pid,
                name: name.to_string(),
            })
        })
        .collect()
}

/// Parse `tasklist /FO CSV /NH` output: `"name","pid",...`.
#[cfg_attr(not(windows), allow(dead_code))]
fn parse_tasklist_output(output: &str) -> Vec<RunningProcess> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split("\",\"");
            let name = fields.next()?.trim().trim_start_matches('"');
            let pid = fields.next()?.trim_end_matches('"').parse().ok()?;
            Some(RunningProcess {
                pid,
                name: name.to_string(),
            })
        })
        .collect()
}

#[cfg(unix)]
fn list_processes_native() -> CoreResult<Vec<RunningProcess>> {
    let output = run_capture("ps", &["-A", "-o", "pid=", "-o", "comm="])?;
    Ok(parse_ps_output(&output))
}

#[cfg(windows)]
fn list_processes_native() -> CoreResult<Vec<RunningProcess>> {
    let output = run_capture("tasklist", &["/FO", "CSV", "/NH"])?;
    Ok(parse_tasklist_output(&output))
}

#[cfg(not(any(unix, windows)))]
fn list_processes_native() -> CoreResult<Vec<RunningProcess>> {
    Err(CoreError::Unsupported("process listing".to_string()))
}

#[cfg(unix)]
fn terminate_process_native(pid: u32) -> CoreResult<()> {
    let pid = pid.to_string();
    match run("kill", &["-TERM", &pid]) {
        Ok(()) => Ok(()),
        // The process may have exited between listing and termination.
        Err(_) if !process_exists(&pid) => Ok(()),
        Err(error) => Err(error),
    }
}

#[cfg(unix)]
fn process_exists(pid: &str) -> bool {
    run("kill", &["-0", pid]).is_ok()
}

#[cfg(windows)]
fn terminate_process_native(pid: u32) -> CoreResult<()> {
    run("taskkill", &["/PID", &pid.to_string()])
}

#[cfg(not(any(unix, windows)))]
fn terminate_process_native(_pid: u32) -> CoreResult<()> {
    Err(CoreError::Unsupported("process termination".to_string()))
}

#[cfg(target_os = "macos")]
fn press_key_native(key: MediaKey) -> CoreResult<()> {
    let script = match key {
        MediaKey::VolumeUp => {
            "set volume output volume ((output volume of (get volume settings)) + 6)"
        }
        MediaKey::VolumeDown => {
            "set volume output volume ((output volume of (get volume settings)) - 6)"
        }
        MediaKey::Mute => "set volume output muted (not (output muted of (get volume settings)))",
    };
    run("osascript", &["-e", script])
}

#[cfg(all(unix, not(target_os = "macos")))]
fn press_key_native(key: MediaKey) -> CoreResult<()> {
    let keysym = match key {
        MediaKey::VolumeUp => "XF86AudioRaiseVolume",
        MediaKey::VolumeDown => "XF86AudioLowerVolume",
        MediaKey::Mute => "XF86AudioMute",
    };
    run("xdotool", &["key", keysym])
}

#[cfg(windows)]
fn press_key_native(key: MediaKey) -> CoreResult<()> {
    let code = match key {
        MediaKey::VolumeUp => 175,
        MediaKey::VolumeDown => 174,
        MediaKey::Mute => 173,
    };
    let script = format!("(New-Object -ComObject WScript.Shell).SendKeys([char]{code})");
    run("powershell", &["-NoProfile", "-Command", &script])
}

#[cfg(not(any(unix, windows)))]
fn press_key_native(_key: MediaKey) -> CoreResult<()> {
    Err(CoreError::Unsupported("media keys".to_string()))
}

#[cfg(target_os = "macos")]
fn send_hotkey_native(hotkey: Hotkey) -> CoreResult<()> {
    let script = match hotkey {
        Hotkey::ShowDesktop => "tell application \"System Events\" to key code 103",
        Hotkey::TaskView => "tell application \"Mission Control\" to launch",
        Hotkey::SwitchWindow => {
            "tell application \"System Events\" to key code 48 using command down"
        }
    };
    run("osascript", &["-e", script])
}

#[cfg(all(unix, not(target_os = "macos")))]
fn send_hotkey_native(hotkey: Hotkey) -> CoreResult<()> {
    let chord = match hotkey {
        Hotkey::ShowDesktop => "super+d",
        Hotkey::TaskView => "super",
        Hotkey::SwitchWindow => "alt+Tab",
    };
    run("xdotool", &["key", chord])
}

#[cfg(windows)]
fn send_hotkey_native(hotkey: Hotkey) -> CoreResult<()> {
    let script = match hotkey {
        Hotkey::ShowDesktop => "(New-Object -ComObject Shell.Application).MinimizeAll()",
        Hotkey::TaskView => "(New-Object -ComObject Shell.Application).WindowSwitcher()",
        Hotkey::SwitchWindow => "(New-Object -ComObject WScript.Shell).SendKeys('%{TAB}')",
    };
    run("powershell", &["-NoProfile", "-Command", script])
}

#[cfg(not(any(unix, windows)))]
fn send_hotkey_native(_hotkey: Hotkey) -> CoreResult<()> {
    Err(CoreError::Unsupported("keyboard shortcuts".to_string()))
}

#[cfg(target_os = "macos")]
fn capture_screenshot_native(output_path: &Path) -> CoreResult<()> {
    let path = output_path.to_string_lossy().into_owned();
    run("screencapture", &["-x", path.as_str()])
}

#[cfg(all(unix, not(target_os = "macos")))]
fn capture_screenshot_native(output_path: &Path) -> CoreResult<()> {
    let path = output_path.to_string_lossy().into_owned();
    let path = path.as_str();
    let candidates: [(&str, Vec<&str>); 3] = [
        ("gnome-screenshot", vec!["-f", path]),
        ("scrot", vec![path]),
        ("grim", vec![path]),
    ];
    let mut last_error = None;
    for (program, args) in &candidates {
        match run(program, args) {
            Ok(()) => return Ok(()),
            Err(error) => last_error = Some(error),
        }
    }
    Err(last_error.unwrap_or_else(|| CoreError::Unsupported("screenshot".to_string())))
}

#[cfg(not(unix))]
fn capture_screenshot_native(_output_path: &Path) -> CoreResult<()> {
    Err(CoreError::Unsupported(
        "screenshot tool not supported on this platform".to_string(),
    ))
}

#[cfg(target_os = "macos")]
fn lock_screen_native() -> CoreResult<()> {
    run("pmset", &["displaysleepnow"])
}

#[cfg(all(unix, not(target_os = "macos")))]
fn lock_screen_native() -> CoreResult<()> {
    run("loginctl", &["lock-session"])
}

#[cfg(windows)]
fn lock_screen_native() -> CoreResult<()> {
    run("rundll32.exe", &["user32.dll,LockWorkStation"])
}

#[cfg(not(any(unix, windows)))]
fn lock_screen_native() -> CoreResult<()> {
    Err(CoreError::Unsupported("screen lock".to_string()))
}
