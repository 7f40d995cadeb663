//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::cell::RefCell;

use crate::{generator::DefaultRng, Uuid, V4Generator};

thread_local! {
    static DEFAULT_GENERATOR: RefCell<V4Generator<DefaultRng>> =
        RefCell::new(V4Generator::from_entropy());
}

/// Generates a UUIDv4 object.
///
/// This function employs a thread-local generator seeded from the operating system's entropy
/// source. On Unix, the generator is reseeded when the process ID changes (i.e., upon process
/// forks) so that a parent and child never produce the same sequence.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidv4::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuidv4::uuid4().to_string();
/// ```
pub fn uuid4() -> Uuid {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::pid_changed() {
            g.replace(V4Generator::from_entropy());
        }

        g.borrow_mut().generate()
    })
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Returns true if the process ID differs from the one seen by the previous call on this
    /// thread.
    pub fn pid_changed() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            pid != last_pid.replace(pid)
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn pid_changed() -> bool {
        false
    }
}
