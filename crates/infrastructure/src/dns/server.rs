use super::response_sink::HickorySink;
use hickory_proto::op::ResponseCode;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use rdns6_application::ports::ChainHandler;
use rdns6_domain::{DnsQuery, DomainError, RecordType};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Adapts hickory requests to the handler chain.
pub struct SynthServerHandler {
    chain: Arc<dyn ChainHandler>,
}

impl SynthServerHandler {
    pub fn new(chain: Arc<dyn ChainHandler>) -> Self {
        Self { chain }
    }
}

/// Extracts the first question. Requests without a usable question are a
/// malformed-input condition from the transport, not a crash.
fn query_from_request(request: &Request) -> Result<DnsQuery, DomainError> {
    let info = request
        .request_info()
        .map_err(|_| DomainError::EmptyQuestion)?;
    let query = &info.query;

    let mut name = query.name().to_string();
    if !name.ends_with('.') {
        name.push('.');
    }

    Ok(DnsQuery::new(
        name,
        RecordType::from_u16(u16::from(query.query_type())),
    ))
}

#[async_trait::async_trait]
impl RequestHandler for SynthServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: R,
    ) -> ResponseInfo {
        let mut sink = HickorySink::new(request, response_handle);

        let query = match query_from_request(request) {
            Ok(query) => query,
            Err(e) => {
                warn!(client = %request.src(), error = %e, "Malformed request");
                let _ = sink.send_error(ResponseCode::FormErr).await;
                return sink
                    .take_info()
                    .unwrap_or_else(|| ResponseInfo::from(*request.header()));
            }
        };

        debug!(
            name = %query.name,
            record_type = %query.record_type,
            client = %request.src(),
            "DNS query received"
        );

        if let Err(e) = self.chain.handle(&query, &mut sink).await {
            error!(name = %query.name, error = %e, "Handler chain failed");
            if !sink.responded() {
                let _ = sink.send_error(ResponseCode::ServFail).await;
            }
        }

        sink.take_info()
            .unwrap_or_else(|| ResponseInfo::from(*request.header()))
    }
}
