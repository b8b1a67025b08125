use super::records;
use async_trait::async_trait;
use hickory_proto::op::{Header, ResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, ResponseHandler, ResponseInfo};
use rdns6_application::ports::ResponseSink;
use rdns6_domain::{DomainError, SynthRecord};

/// `ResponseSink` over a hickory response handle.
///
/// Replies are built as direct replies to the inbound request (transaction
/// id and flags copied). The `ResponseInfo` of the write is kept so the
/// server adapter can hand it back to hickory.
pub struct HickorySink<'a, R: ResponseHandler> {
    request: &'a Request,
    handle: R,
    info: Option<ResponseInfo>,
}

impl<'a, R: ResponseHandler> HickorySink<'a, R> {
    pub fn new(request: &'a Request, handle: R) -> Self {
        Self {
            request,
            handle,
            info: None,
        }
    }

    /// True once a reply has been written through this sink.
    pub fn responded(&self) -> bool {
        self.info.is_some()
    }

    pub fn take_info(&mut self) -> Option<ResponseInfo> {
        self.info.take()
    }

    pub async fn send_error(&mut self, code: ResponseCode) -> Result<(), DomainError> {
        let builder = MessageResponseBuilder::from_message_request(self.request);
        let mut header = Header::response_from_request(self.request.header());
        header.set_response_code(code);
        let response = builder.build(header, &[], &[], &[], &[]);

        self.info = Some(
            self.handle
                .send_response(response)
                .await
                .map_err(|e| DomainError::ResponseWrite(e.to_string()))?,
        );
        Ok(())
    }
}

#[async_trait]
impl<'a, R: ResponseHandler> ResponseSink for HickorySink<'a, R> {
    async fn send_answer(&mut self, answer: &SynthRecord) -> Result<(), DomainError> {
        let record = records::to_wire_record(answer)?;
        let builder = MessageResponseBuilder::from_message_request(self.request);
        let header = Header::response_from_request(self.request.header());
        let answers = [record];
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        self.info = Some(
            self.handle
                .send_response(response)
                .await
                .map_err(|e| DomainError::ResponseWrite(e.to_string()))?,
        );
        Ok(())
    }

    async fn send_refused(&mut self) -> Result<(), DomainError> {
        self.send_error(ResponseCode::Refused).await
    }
}
