// @generated
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Country {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub code: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VpnServer {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub host_name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub ip: ::prost::alloc::string::String,
    #[prost(int32, tag = "4")]
    pub score: i32,
    #[prost(int32, tag = "5")]
    pub ping: i32,
    #[prost(int64, tag = "6")]
    pub speed: i64,
    #[prost(message, optional, tag = "7")]
    pub country: ::core::option::Option<Country>,
    #[prost(int32, tag = "8")]
    pub num_vpn_sessions: i32,
    #[prost(int64, tag = "9")]
    pub uptime: i64,
    #[prost(int32, tag = "10")]
    pub total_users: i32,
    #[prost(int64, tag = "11")]
    pub total_traffic: i64,
    #[prost(string, tag = "12")]
    pub log_type: ::prost::alloc::string::String,
    #[prost(string, tag = "13")]
    pub operator: ::prost::alloc::string::String,
    #[prost(string, tag = "14")]
    pub message: ::prost::alloc::string::String,
    #[prost(string, tag = "15")]
    pub open_vpn_config: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "16")]
    pub created_at: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "17")]
    pub updated_at: ::core::option::Option<::prost_types::Timestamp>,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct VersionRequest {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VersionResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub release: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub commit: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub build_time: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct HealthzRequest {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HealthzResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ListCountriesRequest {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListCountriesResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub data: ::prost::alloc::vec::Vec<Country>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListVpnServersRequest {
    /// Optional ISO-like country code filter; empty means all countries.
    #[prost(string, tag = "1")]
    pub country_code: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListVpnServersResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub data: ::prost::alloc::vec::Vec<VpnServer>,
}
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct TriggerIngestionRequest {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TriggerIngestionResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
    /// Every record fetched in this cycle, persisted or not.
    #[prost(message, repeated, tag = "2")]
    pub data: ::prost::alloc::vec::Vec<VpnServer>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerifyReceiptRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub receipt_data: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VerifyReceiptResponse {
    #[prost(string, tag = "1")]
    pub api: ::prost::alloc::string::String,
}
/// Generated client implementations.
pub mod vpn_directory_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    #[derive(Debug, Clone)]
    pub struct VpnDirectoryClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl VpnDirectoryClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> VpnDirectoryClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> VpnDirectoryClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::Body>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::Body>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::Body>,
            >>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            VpnDirectoryClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        pub async fn version(
            &mut self,
            request: impl tonic::IntoRequest<super::VersionRequest>,
        ) -> std::result::Result<
            tonic::Response<super::VersionResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/relaydir.v1.VpnDirectory/Version",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("relaydir.v1.VpnDirectory", "Version"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn healthz(
            &mut self,
            request: impl tonic::IntoRequest<super::HealthzRequest>,
        ) -> std::result::Result<
            tonic::Response<super::HealthzResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/relaydir.v1.VpnDirectory/Healthz",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("relaydir.v1.VpnDirectory", "Healthz"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn list_countries(
            &mut self,
            request: impl tonic::IntoRequest<super::ListCountriesRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListCountriesResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/relaydir.v1.VpnDirectory/ListCountries",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("relaydir.v1.VpnDirectory", "ListCountries"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn list_vpn_servers(
            &mut self,
            request: impl tonic::IntoRequest<super::ListVpnServersRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListVpnServersResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/relaydir.v1.VpnDirectory/ListVpnServers",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("relaydir.v1.VpnDirectory", "ListVpnServers"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn trigger_ingestion(
            &mut self,
            request: impl tonic::IntoRequest<super::TriggerIngestionRequest>,
        ) -> std::result::Result<
            tonic::Response<super::TriggerIngestionResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/relaydir.v1.VpnDirectory/TriggerIngestion",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("relaydir.v1.VpnDirectory", "TriggerIngestion"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn verify_receipt(
            &mut self,
            request: impl tonic::IntoRequest<super::VerifyReceiptRequest>,
        ) -> std::result::Result<
            tonic::Response<super::VerifyReceiptResponse>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/relaydir.v1.VpnDirectory/VerifyReceipt",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("relaydir.v1.VpnDirectory", "VerifyReceipt"));
            self.inner.unary(req, path, codec).await
        }
    }
}
/// Generated server implementations.
pub mod vpn_directory_server {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with VpnDirectoryServer.
    #[async_trait]
    pub trait VpnDirectory: std::marker::Send + std::marker::Sync + 'static {
        async fn version(
            &self,
            request: tonic::Request<super::VersionRequest>,
        ) -> std::result::Result<tonic::Response<super::VersionResponse>, tonic::Status>;
        async fn healthz(
            &self,
            request: tonic::Request<super::HealthzRequest>,
        ) -> std::result::Result<tonic::Response<super::HealthzResponse>, tonic::Status>;
        async fn list_countries(
            &self,
            request: tonic::Request<super::ListCountriesRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListCountriesResponse>,
            tonic::Status,
        >;
        async fn list_vpn_servers(
            &self,
            request: tonic::Request<super::ListVpnServersRequest>,
        ) -> std::result::Result<
            tonic::Response<super::ListVpnServersResponse>,
            tonic::Status,
        >;
        async fn trigger_ingestion(
            &self,
            request: tonic::Request<super::TriggerIngestionRequest>,
        ) -> std::result::Result<
            tonic::Response<super::TriggerIngestionResponse>,
            tonic::Status,
        >;
        async fn verify_receipt(
            &self,
            request: tonic::Request<super::VerifyReceiptRequest>,
        ) -> std::result::Result<
            tonic::Response<super::VerifyReceiptResponse>,
            tonic::Status,
        >;
    }
    #[derive(Debug)]
    pub struct VpnDirectoryServer<T> {
        inner: Arc<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    impl<T> VpnDirectoryServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self {
                inner,
                accept_compression_encodings: Default::default(),
                send_compression_encodings: Default::default(),
                max_decoding_message_size: None,
                max_encoding_message_size: None,
            }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
        /// Enable decompressing requests with the given encoding.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.accept_compression_encodings.enable(encoding);
            self
        }
        /// Compress responses with the given encoding, if the client supports it.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.send_compression_encodings.enable(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.max_decoding_message_size = Some(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.max_encoding_message_size = Some(limit);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for VpnDirectoryServer<T>
    where
        T: VpnDirectory,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::Body>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/relaydir.v1.VpnDirectory/Version" => {
                    #[allow(non_camel_case_types)]
                    struct VersionSvc<T: VpnDirectory>(pub Arc<T>);
                    impl<
                        T: VpnDirectory,
                    > tonic::server::UnaryService<super::VersionRequest>
                    for VersionSvc<T> {
                        type Response = super::VersionResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::VersionRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VpnDirectory>::version(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = VersionSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/relaydir.v1.VpnDirectory/Healthz" => {
                    #[allow(non_camel_case_types)]
                    struct HealthzSvc<T: VpnDirectory>(pub Arc<T>);
                    impl<
                        T: VpnDirectory,
                    > tonic::server::UnaryService<super::HealthzRequest>
                    for HealthzSvc<T> {
                        type Response = super::HealthzResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::HealthzRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VpnDirectory>::healthz(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = HealthzSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/relaydir.v1.VpnDirectory/ListCountries" => {
                    #[allow(non_camel_case_types)]
                    struct ListCountriesSvc<T: VpnDirectory>(pub Arc<T>);
                    impl<
                        T: VpnDirectory,
                    > tonic::server::UnaryService<super::ListCountriesRequest>
                    for ListCountriesSvc<T> {
                        type Response = super::ListCountriesResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ListCountriesRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VpnDirectory>::list_countries(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ListCountriesSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/relaydir.v1.VpnDirectory/ListVpnServers" => {
                    #[allow(non_camel_case_types)]
                    struct ListVpnServersSvc<T: VpnDirectory>(pub Arc<T>);
                    impl<
                        T: VpnDirectory,
                    > tonic::server::UnaryService<super::ListVpnServersRequest>
                    for ListVpnServersSvc<T> {
                        type Response = super::ListVpnServersResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ListVpnServersRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VpnDirectory>::list_vpn_servers(&inner, request)
                                    .await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ListVpnServersSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/relaydir.v1.VpnDirectory/TriggerIngestion" => {
                    #[allow(non_camel_case_types)]
                    struct TriggerIngestionSvc<T: VpnDirectory>(pub Arc<T>);
                    impl<
                        T: VpnDirectory,
                    > tonic::server::UnaryService<super::TriggerIngestionRequest>
                    for TriggerIngestionSvc<T> {
                        type Response = super::TriggerIngestionResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::TriggerIngestionRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VpnDirectory>::trigger_ingestion(&inner, request)
                                    .await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = TriggerIngestionSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/relaydir.v1.VpnDirectory/VerifyReceipt" => {
                    #[allow(non_camel_case_types)]
                    struct VerifyReceiptSvc<T: VpnDirectory>(pub Arc<T>);
                    impl<
                        T: VpnDirectory,
                    > tonic::server::UnaryService<super::VerifyReceiptRequest>
                    for VerifyReceiptSvc<T> {
                        type Response = super::VerifyReceiptResponse;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::VerifyReceiptRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VpnDirectory>::verify_receipt(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = VerifyReceiptSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        let mut response = http::Response::new(
                            tonic::body::Body::default(),
                        );
                        let headers = response.headers_mut();
                        headers
                            .insert(
                                tonic::Status::GRPC_STATUS,
                                (tonic::Code::Unimplemented as i32).into(),
                            );
                        headers
                            .insert(
                                http::header::CONTENT_TYPE,
                                tonic::metadata::GRPC_CONTENT_TYPE,
                            );
                        Ok(response)
                    })
                }
            }
        }
    }
    impl<T> Clone for VpnDirectoryServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                accept_compression_encodings: self.accept_compression_encodings,
                send_compression_encodings: self.send_compression_encodings,
                max_decoding_message_size: self.max_decoding_message_size,
                max_encoding_message_size: self.max_encoding_message_size,
            }
        }
    }
    /// Generated gRPC service name
    pub const SERVICE_NAME: &str = "relaydir.v1.VpnDirectory";
    impl<T> tonic::server::NamedService for VpnDirectoryServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
