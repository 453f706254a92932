pub(crate) mod record;
pub(crate) mod scan;
pub(crate) mod serve;
pub(crate) mod top;
