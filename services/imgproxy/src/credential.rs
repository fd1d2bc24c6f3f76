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

use std::fmt::{Debug, Formatter};

use imgsign_core::hash::hex_decode;
use imgsign_core::utils::Redact;
use imgsign_core::{Error, Result};

/// Credential for imgproxy URL signatures.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Decoded signing key.
    pub key: Vec<u8>,
    /// Decoded salt, prepended to the path before signing.
    pub salt: Vec<u8>,
}

impl Credential {
    /// Create a new credential from raw bytes.
    pub fn new(key: Vec<u8>, salt: Vec<u8>) -> Self {
        Self { key, salt }
    }

    /// Create a credential from hex encoded key and salt, the way imgproxy
    /// expects them in `IMGPROXY_KEY` and `IMGPROXY_SALT`.
    pub fn from_hex(key: &str, salt: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::argument_invalid("key must not be empty"));
        }
        if salt.is_empty() {
            return Err(Error::argument_invalid("salt must not be empty"));
        }

        if key.len() % 2 == 1 {
            return Err(Error::format_invalid(
                "invalid key: the key cannot have an odd number of digits",
            ));
        }
        if salt.len() % 2 == 1 {
            return Err(Error::format_invalid(
                "invalid salt: the salt cannot have an odd number of digits",
            ));
        }

        Ok(Self {
            key: hex_decode(key)?,
            salt: hex_decode(salt)?,
        })
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("key", &Redact::from(&self.key))
            .field("salt", &Redact::from(&self.salt))
            .finish()
    }
}
