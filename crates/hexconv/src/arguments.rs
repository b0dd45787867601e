use {
    anyhow::{Context, Result},
    conversions::{BigUint, ConversionRequest, Primitive, decode_hex},
    std::fmt::{self, Display, Formatter},
};

#[derive(clap::Parser)]
#[clap(about = "Convert values between bytes, integers, hex and text")]
pub struct Arguments {
    #[clap(long, env, default_value = "warn,conversions=debug,hexconv=debug")]
    pub log_filter: String,

    /// Output log events as JSON.
    #[clap(long, env)]
    pub log_json: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the value as `0x` prefixed hex.
    ToHex(Input),
    /// Print the value as a decimal integer.
    ToInt(Input),
    /// Print the bytes of the value as `0x` prefixed hex.
    ToBytes(Input),
    /// Print the value as UTF-8 text.
    ToText(Input),
}

/// The three channels a value can be passed through. Exactly one of them has
/// to be used.
#[derive(clap::Args, Debug)]
pub struct Input {
    #[clap(flatten)]
    pub primitive: PrimitiveArgs,

    /// Hex text, with or without `0x` prefix.
    #[clap(long)]
    pub hexstr: Option<String>,

    /// UTF-8 text. Decimal digits when converting to an integer.
    #[clap(long)]
    pub text: Option<String>,
}

#[derive(clap::Args, Debug)]
#[group(multiple = false)]
pub struct PrimitiveArgs {
    /// Unsigned decimal integer.
    #[clap(long)]
    pub int: Option<BigUint>,

    /// Boolean, `true` or `false`.
    #[clap(long = "bool")]
    pub boolean: Option<bool>,

    /// Raw bytes, written as hex.
    #[clap(long)]
    pub bytes: Option<String>,
}

impl PrimitiveArgs {
    pub fn into_primitive(self) -> Result<Option<Primitive>> {
        let Self {
            int,
            boolean,
            bytes,
        } = self;
        if let Some(bytes) = bytes {
            let bytes = decode_hex(&bytes).context("invalid --bytes argument")?;
            return Ok(Some(bytes.into()));
        }
        Ok(int.map(Primitive::from).or(boolean.map(Primitive::from)))
    }
}

impl Input {
    pub fn into_request(self) -> Result<ConversionRequest> {
        let primitive = self.primitive.into_primitive()?;
        Ok(ConversionRequest::from_parts(primitive, self.hexstr, self.text)?)
    }
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self {
            log_filter,
            log_json,
            command,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_json: {log_json}")?;
        writeln!(f, "command: {command:?}")?;
        Ok(())
    }
}
