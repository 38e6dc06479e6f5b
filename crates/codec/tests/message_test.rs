use std::net::{Ipv4Addr, Ipv6Addr};
use zutil_dns_codec::{
    unresolved_pointer, CodecConfig, CodecError, Header, Message, OpCode, PointerMode, Question,
    RecordClass, RecordType, ResourceRecord, ResponseCode,
};

mod helpers;
use helpers::{
    bytes, APPLETV_QUERY, APPLETV_RESPONSE, GOOGLE_MULTI_ANSWER, GOOGLE_QUERY, IPHONE_QUERY,
};

fn config(pointer_mode: PointerMode) -> CodecConfig {
    CodecConfig {
        pointer_mode,
        ..CodecConfig::default()
    }
}

#[test]
fn test_empty_query_message_is_bare_header() {
    let message = Message::new_query(0);
    assert_eq!(message.to_bytes().unwrap(), vec![0u8; 12]);
}

#[test]
fn test_write_appletv_query() {
    let mut message = Message::new_query(0);
    message.add_question(Question::new("appletv.local", RecordType::A, RecordClass::IN)).unwrap();

    let mut out = Vec::new();
    message.write(&mut out).unwrap();
    assert_eq!(out, bytes(APPLETV_QUERY));
}

#[test]
fn test_write_google_query_with_recursion_desired() {
    let mut message = Message::new_query(0x241a);
    message.header_mut().recursion_desired = true;
    message.add_question(Question::new("www.google.com", RecordType::A, RecordClass::IN)).unwrap();

    assert_eq!(message.to_bytes().unwrap(), bytes(GOOGLE_QUERY));
}

#[test]
fn test_read_appletv_response() {
    let message = Message::from_bytes(&bytes(APPLETV_RESPONSE)).unwrap();

    let header = message.header();
    assert!(header.query_response);
    assert!(header.authoritative_answer);
    assert_eq!(header.answer_count, 1);
    assert_eq!(header.additional_count, 2);
    assert!(message.questions().is_empty());

    let answer = &message.answer_records()[0];
    assert_eq!(answer.name, "appletv.local");
    assert_eq!(answer.record_type, RecordType::A);
    assert_eq!(answer.class, RecordClass::IN);
    assert_eq!(answer.ttl, 30720);
    assert_eq!(answer.data, vec![0x99, 0x6d, 0x07, 0x5a]);
    assert_eq!(answer.ipv4_address(), Some(Ipv4Addr::new(153, 109, 7, 90)));

    let aaaa = &message.additional_records()[0];
    assert_eq!(aaaa.name, "appletv.local");
    assert_eq!(aaaa.record_type, RecordType::AAAA);
    assert_eq!(aaaa.class, RecordClass::Unknown(0x8001));
    assert!(aaaa.cache_flush());
    assert_eq!(
        aaaa.ipv6_address(),
        Some("fe80::223:32ff:feb1:2152".parse::<Ipv6Addr>().unwrap())
    );

    let nsec = &message.additional_records()[1];
    assert_eq!(nsec.record_type, RecordType::NSEC);
    assert_eq!(nsec.data.len(), 8);
}

#[test]
fn test_read_google_multi_answer_cached() {
    let message = Message::from_bytes(&bytes(GOOGLE_MULTI_ANSWER)).unwrap();

    let header = message.header();
    assert_eq!(header.id, 0x241a);
    assert!(header.query_response);
    assert!(header.recursion_desired);
    assert!(header.recursion_available);
    assert_eq!(header.response_code, ResponseCode::NoError);
    assert_eq!(header.question_count, 1);
    assert_eq!(header.answer_count, 3);
    assert_eq!(header.name_server_count, 0);
    assert_eq!(header.additional_count, 0);

    let question = &message.questions()[0];
    assert_eq!(question.name, "www.google.com");
    assert_eq!(question.record_type, RecordType::A);
    assert_eq!(question.class, RecordClass::IN);

    let answers = message.answer_records();
    assert_eq!(answers.len(), 3);
    assert_eq!(answers[0].name, "www.google.com");
    assert_eq!(answers[0].record_type, RecordType::CNAME);
    assert_eq!(answers[0].class, RecordClass::IN);
    assert_eq!(answers[0].ttl, 337977);

    for answer in &answers[1..] {
        assert_eq!(answer.name, "<44>");
        assert_eq!(unresolved_pointer(&answer.name), Some(44));
        assert_eq!(answer.record_type, RecordType::A);
        assert_eq!(answer.class, RecordClass::IN);
        assert_eq!(answer.ttl, 227);
    }
    assert_eq!(answers[1].ipv4_address(), Some(Ipv4Addr::new(66, 249, 89, 99)));
    assert_eq!(answers[2].ipv4_address(), Some(Ipv4Addr::new(66, 249, 89, 104)));
}

#[test]
fn test_read_google_multi_answer_resolved() {
    let message =
        Message::from_bytes_with(&bytes(GOOGLE_MULTI_ANSWER), &config(PointerMode::Resolve))
            .unwrap();

    let answers = message.answer_records();
    assert_eq!(answers[0].name, "www.google.com");
    assert_eq!(answers[1].name, "www.l.google.com");
    assert_eq!(answers[2].name, "www.l.google.com");
}

#[test]
fn test_read_google_multi_answer_offsets() {
    let message =
        Message::from_bytes_with(&bytes(GOOGLE_MULTI_ANSWER), &config(PointerMode::Offset))
            .unwrap();

    let answers = message.answer_records();
    assert_eq!(message.questions()[0].name, "www.google.com");
    assert_eq!(answers[0].name, "<12>");
    assert_eq!(answers[1].name, "<44>");
}

#[test]
fn test_read_iphone_query_cached() {
    let message = Message::from_bytes(&bytes(IPHONE_QUERY)).unwrap();

    let header = message.header();
    assert_eq!(header.id, 0);
    assert!(!header.query_response);
    assert_eq!(header.question_count, 6);
    assert_eq!(header.answer_count, 0);
    assert_eq!(header.name_server_count, 0);
    assert_eq!(header.additional_count, 1);

    let expected = [
        ("_companion-link._tcp.local", RecordType::PTR),
        ("_homekit._tcp.local", RecordType::PTR),
        ("hal.local", RecordType::Unknown(65)),
        ("hal.local", RecordType::AAAA),
        ("hal.local", RecordType::A),
        ("_sleep-proxy._udp.local", RecordType::PTR),
    ];
    let questions = message.questions();
    assert_eq!(questions.len(), expected.len());
    for (question, (name, record_type)) in questions.iter().zip(expected) {
        assert_eq!(question.name, name);
        assert_eq!(question.record_type, record_type);
        assert_eq!(question.class, RecordClass::IN);
        assert!(!question.unicast_response());
    }

    let opt = &message.additional_records()[0];
    assert_eq!(opt.name, "");
    assert_eq!(opt.record_type, RecordType::OPT);
    assert_eq!(opt.class, RecordClass::Unknown(0x05a0));
    assert_eq!(opt.ttl, 0x1194);
    assert_eq!(opt.data.len(), 18);
}

#[test]
fn test_read_iphone_query_resolved_matches_cached() {
    let cached = Message::from_bytes(&bytes(IPHONE_QUERY)).unwrap();
    let resolved =
        Message::from_bytes_with(&bytes(IPHONE_QUERY), &config(PointerMode::Resolve)).unwrap();
    assert_eq!(cached, resolved);
}

#[test]
fn test_read_iphone_query_offsets() {
    let message =
        Message::from_bytes_with(&bytes(IPHONE_QUERY), &config(PointerMode::Offset)).unwrap();

    let names: Vec<&str> = message.questions().iter().map(|q| q.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "_companion-link._tcp.local",
            "_homekit.<28>",
            "hal.<33>",
            "<59>",
            "<59>",
            "_sleep-proxy._udp.<33>",
        ]
    );
}

#[test]
fn test_header_round_trip_through_message() {
    let mut message = Message::new_response(0xCAFE);
    {
        let header = message.header_mut();
        header.op_code = OpCode::Status;
        header.truncation = true;
        header.recursion_available = true;
        header.response_code = ResponseCode::ServerFailure;
    }

    let decoded = Message::from_bytes(&message.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.header(), message.header());
    assert_eq!(decoded, message);
}

#[test]
fn test_message_round_trip_with_all_sections() {
    let mut message = Message::new_response(42);
    message.add_question(Question::new("example.com", RecordType::MX, RecordClass::IN)).unwrap();
    message.add_answer_records([
        ResourceRecord::new("example.com", RecordType::MX, RecordClass::IN, 300, vec![0, 10, 0]),
        ResourceRecord::new("example.com", RecordType::TXT, RecordClass::IN, 60, b"\x02hi".to_vec()),
    ]).unwrap();
    message.add_name_server_record(ResourceRecord::new(
        "com",
        RecordType::NS,
        RecordClass::IN,
        86400,
        vec![1, b'a', 0],
    )).unwrap();
    message.add_additional_record(ResourceRecord::new(
        "",
        RecordType::OPT,
        RecordClass::Unknown(1232),
        0,
        Vec::new(),
    )).unwrap();

    let decoded = Message::from_bytes(&message.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, message);
}

#[test]
fn test_unknown_codes_survive_round_trip() {
    let mut message = Message::new_query(1);
    message.add_question(Question::new(
        "x.test",
        RecordType::Unknown(65280),
        RecordClass::Unknown(0x8001),
    )).unwrap();

    let decoded = Message::from_bytes(&message.to_bytes().unwrap()).unwrap();
    let question = &decoded.questions()[0];
    assert_eq!(question.record_type.to_u16(), 65280);
    assert_eq!(question.class.to_u16(), 0x8001);
    assert!(question.unicast_response());
}

#[test]
fn test_truncated_message_is_reported() {
    let full = bytes(GOOGLE_MULTI_ANSWER);
    for len in [0, 5, 11, 20, 40, full.len() - 1] {
        let err = Message::from_bytes(&full[..len]).unwrap_err();
        assert!(err.is_truncated(), "length {} gave {:?}", len, err);
    }
}

#[test]
fn test_non_utf8_label_is_rejected() {
    let mut data = bytes(APPLETV_QUERY);
    assert_eq!(&data[12..14], b"\x07a");
    data[13] = 0xff;

    let err = Message::from_bytes(&data).unwrap_err();
    assert!(matches!(err, CodecError::InvalidLabel(_)));
}

#[test]
fn test_read_from_stream_stops_after_counts() {
    let mut data = bytes(APPLETV_QUERY);
    data.extend_from_slice(&[0xde, 0xad]);

    let mut cursor = std::io::Cursor::new(data);
    let message = Message::read(&mut cursor).unwrap();
    assert_eq!(message.questions()[0].name, "appletv.local");
    assert_eq!(cursor.position(), 31);
}

#[test]
fn test_count_mismatch_refuses_to_write() {
    let mut message = Message::new_query(3);
    message.add_answer_record(ResourceRecord::new(
        "a",
        RecordType::A,
        RecordClass::IN,
        0,
        vec![0; 4],
    )).unwrap();
    message.header_mut().question_count = 2;

    let mut out = Vec::new();
    let err = message.write(&mut out).unwrap_err();
    assert!(matches!(
        err,
        CodecError::CountMismatch {
            section: "question",
            header: 2,
            actual: 0
        }
    ));
    assert!(out.is_empty());
}

#[test]
fn test_default_headers() {
    let mut header = Header::new();
    header.set_default_response_data();
    header.answer_count = 1;
    let bytes = header.to_bytes().unwrap();
    assert_eq!(&bytes[2..4], &[0x84, 0x00]);
    assert_eq!(&bytes[6..8], &[0x00, 0x01]);
}
