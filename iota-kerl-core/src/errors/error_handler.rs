use super::error_messages::*;
use crate::{
    bail,
    ensure,
};

#[macro_export]
macro_rules! try_or {
    ($cond:expr, $err:expr) => {{
        let cond = $cond;
        if $crate::LOCATION_LOG && !cond {
            $crate::log::error!("!!! Error occurred @ {}, {}", file!(), line!())
        }
        $crate::try_or(cond, $err)
    }};
}

#[macro_export]
macro_rules! err {
    ($err:expr) => {{
        if $crate::LOCATION_LOG {
            $crate::log::error!("!!! Error occurred @ {}, {}", file!(), line!());
        }
        $crate::err($err)
    }};
}

pub fn try_or(cond: bool, err: Errors) -> Result<(), anyhow::Error> {
    ensure!(cond, err);
    Ok(())
}

pub fn err<T>(err: Errors) -> Result<T, anyhow::Error> {
    bail!(err)
}
