//! 대칭 암호화 서비스
//!
//! AES-256-GCM으로 문자열을 암호화합니다. 키는 `CIPHER_SECRET`의 SHA-256 다이제스트이고,
//! 호출마다 새 IV(nonce)를 생성합니다. 출력 형식은 `hex(iv):hex(ciphertext)`이며
//! ciphertext에는 GCM 인증 태그가 포함됩니다.
//!
//! ```rust,ignore
//! let cipher = SymmetricCipher::new(&config.cipher)?;
//! let token = cipher.encrypt("4111-1111-1111-1111")?;
//! assert_eq!(cipher.decrypt(&token)?, "4111-1111-1111-1111");
//! ```

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::aes::Aes256;
use aes_gcm::{Aes256Gcm, AesGcm};
use sha2::{Digest, Sha256};
use crate::config::CipherConfig;
use crate::errors::AppError;

/// 16바이트 IV를 사용하는 AES-256-GCM
type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// 대칭 암호화기
///
/// 키와 IV 길이는 생성 시 한 번 결정되며 이후 변경되지 않습니다.
pub struct SymmetricCipher {
    key: [u8; 32],
    iv_length: usize,
}

impl SymmetricCipher {
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 빈 비밀값 또는 지원하지 않는 IV 길이
    pub fn new(config: &CipherConfig) -> Result<Self, AppError> {
        if config.secret.is_empty() {
            return Err(AppError::ConfigurationError("CIPHER_SECRET must not be empty".to_string()));
        }
        if !matches!(config.iv_length, 12 | 16) {
            return Err(AppError::ConfigurationError(format!(
                "unsupported IV length: {}",
                config.iv_length
            )));
        }

        Ok(Self {
            key: Sha256::digest(config.secret.as_bytes()).into(),
            iv_length: config.iv_length,
        })
    }

    /// 평문을 암호화하여 `hex(iv):hex(ciphertext)` 형식으로 반환합니다.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, AppError> {
        let (iv, ciphertext) = match self.iv_length {
            16 => seal::<Aes256Gcm16>(&self.key, plaintext.as_bytes())?,
            _ => seal::<Aes256Gcm>(&self.key, plaintext.as_bytes())?,
        };

        Ok(format!("{}:{}", hex::encode(iv), hex::encode(ciphertext)))
    }

    /// `encrypt`의 출력을 복호화합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DecryptionError` - 형식 오류, IV 길이 불일치, 키 불일치(인증 태그 실패),
    ///   UTF-8이 아닌 평문
    pub fn decrypt(&self, token: &str) -> Result<String, AppError> {
        let (iv_hex, ciphertext_hex) = token
            .split_once(':')
            .ok_or_else(|| AppError::DecryptionError("expected iv:ciphertext".to_string()))?;

        let iv = hex::decode(iv_hex)
            .map_err(|e| AppError::DecryptionError(format!("invalid iv encoding: {}", e)))?;
        let ciphertext = hex::decode(ciphertext_hex)
            .map_err(|e| AppError::DecryptionError(format!("invalid ciphertext encoding: {}", e)))?;

        if iv.len() != self.iv_length {
            return Err(AppError::DecryptionError(format!(
                "expected {}-byte iv, got {}",
                self.iv_length,
                iv.len()
            )));
        }

        let plaintext = match self.iv_length {
            16 => open::<Aes256Gcm16>(&self.key, &iv, &ciphertext)?,
            _ => open::<Aes256Gcm>(&self.key, &iv, &ciphertext)?,
        };

        String::from_utf8(plaintext)
            .map_err(|_| AppError::DecryptionError("plaintext is not valid UTF-8".to_string()))
    }
}

fn seal<C>(key: &[u8; 32], plaintext: &[u8]) -> Result<(Vec<u8>, Vec<u8>), AppError>
where
    C: Aead + AeadCore + KeyInit,
{
    let cipher = C::new_from_slice(key)
        .map_err(|e| AppError::InternalError(format!("cipher init failed: {}", e)))?;
    let nonce = C::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| AppError::InternalError(format!("encryption failed: {}", e)))?;

    Ok((nonce.to_vec(), ciphertext))
}

/// `iv` 길이는 호출자가 `C`의 nonce 크기와 일치하는지 확인한 뒤 넘깁니다.
fn open<C>(key: &[u8; 32], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, AppError>
where
    C: Aead + AeadCore + KeyInit,
{
    let cipher = C::new_from_slice(key)
        .map_err(|e| AppError::InternalError(format!("cipher init failed: {}", e)))?;

    cipher
        .decrypt(GenericArray::from_slice(iv), ciphertext)
        .map_err(|_| AppError::DecryptionError("authentication tag mismatch".to_string()))
}
