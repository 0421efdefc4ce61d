use nebulith_core::io::Io;

pub struct CliIo;

impl Io for CliIo {}

pub struct CliApi;
