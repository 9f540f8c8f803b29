pub(crate) mod ocsp_request;

pub(crate) use ocsp_request::{CertId, OcspRequest, Request, TbsRequest};
