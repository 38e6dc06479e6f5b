use anyhow::Context;
use clap::Args;
use tracing::debug;
use zutil_dns_codec::{hex, Message, Question};
use zutil_dns_domain::{CodecConfig, RecordClass, RecordType};

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// Domain name to ask for
    pub name: String,

    #[arg(short = 't', long = "type", default_value = "A")]
    pub record_type: RecordType,

    #[arg(long, default_value = "IN")]
    pub class: RecordClass,

    /// Message id, random when omitted
    #[arg(long)]
    pub id: Option<u16>,

    /// Set the RD flag
    #[arg(long)]
    pub recursion_desired: bool,
}

pub fn build_query(args: &QueryArgs) -> anyhow::Result<Message> {
    let id = args.id.unwrap_or_else(|| fastrand::u16(..));
    let mut message = Message::new_query(id);
    message.header_mut().recursion_desired = args.recursion_desired;
    message.add_question(Question::new(args.name.as_str(), args.record_type, args.class))?;
    Ok(message)
}

pub fn query(args: &QueryArgs, config: &CodecConfig) -> anyhow::Result<String> {
    let message = build_query(args)?;
    let bytes = message
        .to_bytes_with(config)
        .with_context(|| format!("Failed to encode query for '{}'", args.name))?;

    debug!(
        id = message.header().id,
        name = %args.name,
        record_type = %args.record_type,
        "Query encoded"
    );
    Ok(hex::encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str) -> QueryArgs {
        QueryArgs {
            name: name.to_string(),
            record_type: RecordType::A,
            class: RecordClass::IN,
            id: Some(0x241a),
            recursion_desired: true,
        }
    }

    #[test]
    fn test_query_matches_capture() {
        let out = query(&args("www.google.com"), &CodecConfig::default()).unwrap();
        assert_eq!(
            out,
            "241a01000001000000000000037777770667\
             6f6f676c6503636f6d0000010001"
        );
    }

    #[test]
    fn test_random_id_when_absent() {
        let mut args = args("example.com");
        args.id = None;
        let message = build_query(&args).unwrap();
        assert_eq!(message.header().question_count, 1);
        assert!(!message.header().query_response);
    }

    #[test]
    fn test_invalid_name_is_an_error() {
        assert!(query(&args("bad..name"), &CodecConfig::default()).is_err());
    }
}
