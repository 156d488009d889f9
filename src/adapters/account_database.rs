//! uid/gid lookup through the operating system's account database.

use std::io;

use nix::unistd::{Group, User, geteuid};

/// Look up the uid of `name`. `Ok(None)` means the user does not exist.
pub fn user_id(name: &str) -> io::Result<Option<u32>> {
    reject_nul(name)?;
    let user = User::from_name(name).map_err(io::Error::from)?;
    Ok(user.map(|user| user.uid.as_raw()))
}

/// Look up the gid of `name`. `Ok(None)` means the group does not exist.
pub fn group_id(name: &str) -> io::Result<Option<u32>> {
    reject_nul(name)?;
    let group = Group::from_name(name).map_err(io::Error::from)?;
    Ok(group.map(|group| group.gid.as_raw()))
}

/// Whether the running process has an effective uid of 0.
pub fn is_root() -> bool {
    geteuid().is_root()
}

fn reject_nul(name: &str) -> io::Result<()> {
    if name.contains('\0') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("account name contains NUL: {name:?}"),
        ));
    }
    Ok(())
}
