// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Hash and encoding related utils.

use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;

/// URL-safe base64 encode without padding.
///
/// `+` becomes `-`, `/` becomes `_` and trailing `=` are dropped.
pub fn base64_url_encode(content: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(content)
}

/// URL-safe base64 encode the UTF-8 bytes of `content`.
pub fn base64_url_encode_str(content: &str) -> String {
    base64_url_encode(content.as_bytes())
}

/// Decode a hex string into bytes.
///
/// Both upper and lower case digits are accepted. Odd length input or
/// non-hex characters return an
/// [`ErrorKind::FormatInvalid`](crate::ErrorKind::FormatInvalid) error.
pub fn hex_decode(content: &str) -> crate::Result<Vec<u8>> {
    Ok(hex::decode(content)?)
}

/// URL-safe base64 encoded HMAC with SHA256 hash over `prefix ‖ content`.
///
/// Use this function instead of concatenating `prefix` and `content` into a
/// new buffer first, it feeds both parts to the MAC directly.
pub fn base64_url_hmac_sha256(key: &[u8], prefix: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(prefix);
    h.update(content);

    base64_url_encode(&h.finalize().into_bytes())
}
