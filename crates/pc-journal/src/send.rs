//! Native-protocol serialization and delivery.

use std::fs::File;
use std::io::Write;
use std::os::fd::AsRawFd;
use std::os::unix::net::UnixDatagram;
use std::path::PathBuf;

use nix::errno::Errno;
use nix::fcntl::{fcntl, FcntlArg, SealFlag};
use nix::sys::memfd::{memfd_create, MemFdCreateFlag};
use nix::sys::socket::{sendmsg, ControlMessage, MsgFlags, UnixAddr};
use tracing::debug;

use crate::error::{JournalError, Result};
use crate::record::RecordBuffer;

/// journald's native datagram socket.
pub const JOURNAL_SOCKET_PATH: &str = "/run/systemd/journal/socket";

/// A sink that commits one assembled entry atomically.
pub trait JournalSink {
    fn send(&self, buffer: &RecordBuffer) -> Result<()>;
}

/// Serializes a record buffer into one native-protocol payload.
///
/// A value without newlines is framed `KEY=value\n`; a value containing
/// newlines is framed `KEY\n` + little-endian u64 byte length + value +
/// `\n`. The concatenation of all frames is the datagram journald commits
/// as a single entry.
pub fn serialize_entry(buffer: &RecordBuffer) -> Vec<u8> {
    let mut payload = Vec::new();
    for record in buffer {
        let value = record.value();
        if value.contains('\n') {
            payload.extend_from_slice(record.key().as_bytes());
            payload.push(b'\n');
            payload.extend_from_slice(&(value.len() as u64).to_le_bytes());
            payload.extend_from_slice(value.as_bytes());
            payload.push(b'\n');
        } else {
            payload.extend_from_slice(record.as_bytes());
            payload.push(b'\n');
        }
    }
    payload
}

/// Delivers entries to a journald native socket.
pub struct JournalSocket {
    path: PathBuf,
}

impl JournalSocket {
    /// Sink bound to the system journal socket.
    pub fn system() -> Self {
        Self {
            path: PathBuf::from(JOURNAL_SOCKET_PATH),
        }
    }

    /// Sink bound to an alternate socket path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Oversized entries go as a sealed memfd passed via `SCM_RIGHTS`;
    /// journald maps the fd after checking the seals.
    fn send_oversize(&self, socket: &UnixDatagram, payload: &[u8]) -> Result<()> {
        let fd = memfd_create(
            c"journal-entry",
            MemFdCreateFlag::MFD_CLOEXEC | MemFdCreateFlag::MFD_ALLOW_SEALING,
        )
        .map_err(JournalError::OversizeFallback)?;
        let mut file = File::from(fd);
        file.write_all(payload)?;

        let seals = SealFlag::F_SEAL_SHRINK
            | SealFlag::F_SEAL_GROW
            | SealFlag::F_SEAL_WRITE
            | SealFlag::F_SEAL_SEAL;
        fcntl(file.as_raw_fd(), FcntlArg::F_ADD_SEALS(seals))
            .map_err(JournalError::OversizeFallback)?;

        let addr = UnixAddr::new(self.path.as_path()).map_err(JournalError::OversizeFallback)?;
        let fds = [file.as_raw_fd()];
        let cmsgs = [ControlMessage::ScmRights(&fds)];
        sendmsg::<UnixAddr>(
            socket.as_raw_fd(),
            &[],
            &cmsgs,
            MsgFlags::empty(),
            Some(&addr),
        )
        .map_err(JournalError::OversizeFallback)?;
        Ok(())
    }
}

impl JournalSink for JournalSocket {
    fn send(&self, buffer: &RecordBuffer) -> Result<()> {
        let payload = serialize_entry(buffer);
        let socket = UnixDatagram::unbound().map_err(JournalError::Send)?;

        match socket.send_to(&payload, &self.path) {
            Ok(_) => {
                debug!(
                    records = buffer.len(),
                    bytes = payload.len(),
                    "sent journal entry"
                );
                Ok(())
            }
            Err(err) if err.raw_os_error() == Some(Errno::EMSGSIZE as i32) => {
                self.send_oversize(&socket, &payload)?;
                debug!(
                    records = buffer.len(),
                    bytes = payload.len(),
                    "sent journal entry via sealed memfd"
                );
                Ok(())
            }
            Err(err)
                if matches!(
                    err.raw_os_error(),
                    Some(code) if code == Errno::ENOENT as i32 || code == Errno::ECONNREFUSED as i32
                ) =>
            {
                Err(JournalError::SocketUnavailable {
                    path: self.path.clone(),
                    source: err,
                })
            }
            Err(err) => Err(JournalError::Send(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn buffer_of(pairs: &[(&str, &str)]) -> RecordBuffer {
        let mut buffer = RecordBuffer::new();
        for (key, value) in pairs {
            buffer.append(key, value);
        }
        buffer
    }

    #[test]
    fn test_serialize_single_line_values() {
        let buffer = buffer_of(&[("MESSAGE", "hello"), ("PRIORITY", "2")]);
        assert_eq!(serialize_entry(&buffer), b"MESSAGE=hello\nPRIORITY=2\n");
    }

    #[test]
    fn test_serialize_multiline_value_length_framed() {
        let buffer = buffer_of(&[("PROBLEM_REPORT", "\nline one\nline two")]);

        let mut expected = Vec::new();
        expected.extend_from_slice(b"PROBLEM_REPORT\n");
        expected.extend_from_slice(&18u64.to_le_bytes());
        expected.extend_from_slice(b"\nline one\nline two");
        expected.push(b'\n');
        assert_eq!(serialize_entry(&buffer), expected);
    }

    #[test]
    fn test_serialize_empty_value() {
        let buffer = buffer_of(&[("PROBLEM_REPORT", "")]);
        assert_eq!(serialize_entry(&buffer), b"PROBLEM_REPORT=\n");
    }

    #[test]
    fn test_serialize_mixed_entry() {
        let buffer = buffer_of(&[("A", "1"), ("B", "x\ny"), ("C", "3")]);

        let mut expected = Vec::new();
        expected.extend_from_slice(b"A=1\n");
        expected.extend_from_slice(b"B\n");
        expected.extend_from_slice(&3u64.to_le_bytes());
        expected.extend_from_slice(b"x\ny\n");
        expected.extend_from_slice(b"C=3\n");
        assert_eq!(serialize_entry(&buffer), expected);
    }

    #[test]
    fn test_send_to_bound_socket() {
        let dir = TempDir::new().unwrap();
        let sock_path = dir.path().join("journal.socket");
        let receiver = UnixDatagram::bind(&sock_path).unwrap();

        let buffer = buffer_of(&[("MESSAGE", "hello"), ("PRIORITY", "2")]);
        JournalSocket::at(&sock_path).send(&buffer).unwrap();

        let mut buf = [0u8; 256];
        let n = receiver.recv(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"MESSAGE=hello\nPRIORITY=2\n");
    }

    #[test]
    fn test_send_missing_socket_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let sink = JournalSocket::at(dir.path().join("nope.socket"));
        let err = sink.send(&buffer_of(&[("MESSAGE", "x")])).unwrap_err();
        assert!(matches!(err, JournalError::SocketUnavailable { .. }));
    }
}
