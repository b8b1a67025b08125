//! End-to-end tests that exercise the full UDP path: a real
//! `ServerFuture` with the synthesis chain behind it, queried over the
//! wire with hand-built messages.

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use hickory_server::ServerFuture;
use rdns6_application::ports::ChainHandler;
use rdns6_application::use_cases::{RefuseHandler, ReverseSynthHandler};
use rdns6_domain::SynthConfig;
use rdns6_infrastructure::dns::SynthServerHandler;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;

const ARPA_1234: &str =
    "4.3.2.1.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.0.ip6.arpa.";
const FORWARD_1234: &str = "00000000000000000000000000001234.v6.example.com.";

async fn spawn_server(presets: HashMap<String, String>) -> SocketAddr {
    let config = SynthConfig {
        suffix: "v6.example.com".to_string(),
        ttl: 900,
        presets,
    };
    let chain: Arc<dyn ChainHandler> = Arc::new(ReverseSynthHandler::new(
        Arc::new(config),
        Arc::new(RefuseHandler),
    ));
    let handler = SynthServerHandler::new(chain);

    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    let mut server = ServerFuture::new(handler);
    server.register_socket(socket);
    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });

    addr
}

async fn exchange(server: SocketAddr, name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new(0x1d6a, MessageType::Query, OpCode::Query);
    message
        .set_recursion_desired(true)
        .add_query(Query::query(Name::from_utf8(name).unwrap(), record_type));

    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket
        .send_to(&message.to_vec().unwrap(), server)
        .await
        .unwrap();

    let mut buf = [0u8; 4096];
    let (len, _) = tokio::time::timeout(Duration::from_secs(5), socket.recv_from(&mut buf))
        .await
        .expect("no response within 5s")
        .unwrap();

    Message::from_vec(&buf[..len]).unwrap()
}

#[tokio::test]
async fn test_synthesizes_ptr_over_udp() {
    let server = spawn_server(HashMap::new()).await;

    let response = exchange(server, ARPA_1234, RecordType::PTR).await;

    assert_eq!(response.id(), 0x1d6a);
    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.answers().len(), 1);

    let answer = &response.answers()[0];
    assert_eq!(answer.name().to_utf8(), ARPA_1234);
    assert_eq!(answer.dns_class(), DNSClass::IN);
    assert_eq!(answer.ttl(), 900);
    match answer.data() {
        RData::PTR(ptr) => assert_eq!(ptr.0.to_utf8(), FORWARD_1234),
        other => panic!("expected PTR rdata, got {other:?}"),
    }
}

#[tokio::test]
async fn test_synthesizes_aaaa_over_udp() {
    let server = spawn_server(HashMap::new()).await;

    let response = exchange(server, FORWARD_1234, RecordType::AAAA).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.answers().len(), 1);

    let answer = &response.answers()[0];
    assert_eq!(answer.name().to_utf8(), FORWARD_1234);
    match answer.data() {
        RData::AAAA(aaaa) => assert_eq!(aaaa.0, "::1234".parse::<std::net::Ipv6Addr>().unwrap()),
        other => panic!("expected AAAA rdata, got {other:?}"),
    }
}

#[tokio::test]
async fn test_preset_overrides_generated_ptr() {
    let mut presets = HashMap::new();
    presets.insert(ARPA_1234.to_string(), "router.example.com.".to_string());
    let server = spawn_server(presets).await;

    let response = exchange(server, ARPA_1234, RecordType::PTR).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.answers().len(), 1);
    match response.answers()[0].data() {
        RData::PTR(ptr) => assert_eq!(ptr.0.to_utf8(), "router.example.com."),
        other => panic!("expected PTR rdata, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_question_section_gets_form_error() {
    let server = spawn_server(HashMap::new()).await;

    // Wire-valid message with no question section at all.
    let message = Message::new(0x2b11, MessageType::Query, OpCode::Query);

    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket
        .send_to(&message.to_vec().unwrap(), server)
        .await
        .unwrap();

    let mut buf = [0u8; 4096];
    let (len, _) = tokio::time::timeout(Duration::from_secs(5), socket.recv_from(&mut buf))
        .await
        .expect("no response within 5s")
        .unwrap();
    let response = Message::from_vec(&buf[..len]).unwrap();

    assert_eq!(response.id(), 0x2b11);
    assert_eq!(response.response_code(), ResponseCode::FormErr);
    assert!(response.answers().is_empty());
}

#[tokio::test]
async fn test_refuses_unclaimed_queries() {
    let server = spawn_server(HashMap::new()).await;

    let response = exchange(server, "host.example.com.", RecordType::A).await;

    assert_eq!(response.response_code(), ResponseCode::Refused);
    assert!(response.answers().is_empty());
}

#[tokio::test]
async fn test_short_encoded_aaaa_is_refused_not_answered() {
    let server = spawn_server(HashMap::new()).await;

    // 31 nibbles instead of 32: not a synthesizable name.
    let name = format!("{}1234.v6.example.com.", "0".repeat(27));
    let response = exchange(server, &name, RecordType::AAAA).await;

    assert_eq!(response.response_code(), ResponseCode::Refused);
    assert!(response.answers().is_empty());
}
